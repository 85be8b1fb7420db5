use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Refresh 요청 타임아웃 기본값 (초)
/// Default refresh request timeout in seconds
const DEFAULT_REFRESH_TIMEOUT_SECS: u64 = 10;

// 클라이언트 설정
// Client configuration
//
// 역할: 프론트엔드의 .env (NEXT_PUBLIC_API_URL 같은 것)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 백엔드 API base URL (trailing slash 없음)
    /// Backend API base URL (no trailing slash)
    pub base_url: String,

    /// Refresh 요청 제한 시간
    /// Upper time bound for the refresh operation
    pub refresh_timeout: Duration,

    /// User-Agent 헤더 값
    /// User-Agent header value
    pub user_agent: String,
}

impl ClientConfig {
    /// 환경 변수에서 설정 로드
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // 1. Base URL (기본값: 로컬 개발 서버)
        let base_url = std::env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        // 2. Refresh 타임아웃 (기본값: 10초)
        let refresh_timeout_secs = std::env::var("STOREFRONT_REFRESH_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_TIMEOUT_SECS);

        Self::build(&base_url, Duration::from_secs(refresh_timeout_secs))
    }

    /// Base URL만 지정해서 생성 (타임아웃은 기본값)
    /// Create with an explicit base URL (default timeout)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::build(base_url, Duration::from_secs(DEFAULT_REFRESH_TIMEOUT_SECS))
    }

    fn build(base_url: &str, refresh_timeout: Duration) -> Result<Self> {
        // URL 형식 검증 (저장은 문자열로, 경로는 단순 연결로 붙인다)
        Url::parse(base_url).context("Failed to parse storefront API base URL")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            refresh_timeout,
            user_agent: "storefront-client/1.0".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ClientConfig::with_base_url("http://localhost:3000/api/").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.refresh_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        // URL이 아닌 값은 설정 단계에서 걸러진다
        assert!(ClientConfig::with_base_url("not a url").is_err());
    }
}
