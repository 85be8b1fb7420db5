use thiserror::Error;

/// 스토어프론트 API 에러
/// Storefront API errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Access token이 서버에서 거부됨 (401)
    /// Access token rejected by the backend; recoverable via refresh
    #[error("Access token rejected by server")]
    Unauthorized,

    /// Refresh 작업 자체가 실패함 (거부, 타임아웃 등)
    /// The refresh operation itself failed (rejected, timed out, ...)
    #[error("Failed to refresh session: {0}")]
    RefreshFailed(String),

    /// 세션 만료 (재시도 예산 소진 또는 refresh token 없음)
    /// Session expired (retry budget exhausted or no refresh credential)
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// 그 외 HTTP 에러 (검증 실패, 404, 서버 에러 등) - 그대로 전달
    /// Other HTTP errors (validation, not-found, server error) - passed through
    #[error("Request failed: {status} - {message}")]
    Http { status: u16, message: String },

    /// 네트워크 에러 (연결 실패, 전송 중단 등)
    /// Network error (connection failure, aborted transfer, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 body 직렬화 실패
    /// Failed to serialize request body
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// 응답 body 파싱 실패
    /// Failed to parse response body
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Refresh 작업 내부 에러
/// Internal refresh-operation errors
///
/// 하나의 refresh 결과가 대기 중인 모든 요청에 broadcast되므로 Clone이 필요하다.
#[derive(Error, Debug, Clone)]
pub enum RefreshError {
    /// 세션에 refresh credential이 없음
    /// No refresh credential in the session
    #[error("No refresh credential in session")]
    MissingCredential,

    /// 서버가 refresh credential을 거부함
    /// The backend rejected the refresh credential
    #[error("Refresh rejected by server: {0}")]
    Rejected(String),

    /// Refresh 요청이 제한 시간을 초과함
    /// The refresh request exceeded its time bound
    #[error("Refresh request timed out")]
    TimedOut,

    /// Refresh 요청의 네트워크/파싱 에러
    /// Network or decoding error on the refresh request
    #[error("Refresh request failed: {0}")]
    Network(String),
}

/// RefreshError를 호출자에게 보여줄 ApiError로 변환
/// - credential이 아예 없으면 SessionExpired (재인증 유도)
/// - 그 외에는 RefreshFailed
impl From<RefreshError> for ApiError {
    fn from(err: RefreshError) -> Self {
        match err {
            RefreshError::MissingCredential => ApiError::SessionExpired,
            other => ApiError::RefreshFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_session_expired() {
        // refresh token이 없으면 재인증을 유도해야 한다
        let err: ApiError = RefreshError::MissingCredential.into();
        assert!(matches!(err, ApiError::SessionExpired));
    }

    #[test]
    fn test_other_refresh_errors_map_to_refresh_failed() {
        let err: ApiError = RefreshError::TimedOut.into();
        assert!(matches!(err, ApiError::RefreshFailed(_)));

        let err: ApiError = RefreshError::Rejected("401 - revoked".to_string()).into();
        match err {
            ApiError::RefreshFailed(message) => assert!(message.contains("revoked")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
