use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::shared::errors::ApiError;

/// Access token claims (클라이언트가 읽는 payload)
/// Access token claims (the payload the client reads)
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 사용자 ID
    /// User ID
    pub user_id: u64,

    /// 휴대폰 번호
    /// Phone number
    pub phone: String,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessClaims {
    /// JWT payload 디코딩 (서명 검증 없음)
    /// Decode the JWT payload without signature verification
    ///
    /// 클라이언트는 서명 키를 가지고 있지 않다. 검증은 서버 몫이고,
    /// 여기서는 만료 시각 표시용으로 claims만 읽는다.
    pub fn decode(token: &str) -> Result<Self, ApiError> {
        // 1. JWT 구조 확인 (header.payload.signature)
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| ApiError::Decode("Malformed JWT: missing payload segment".to_string()))?;

        // 2. Base64 디코딩 (URL-safe, padding 없음)
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| ApiError::Decode(format!("Failed to decode JWT payload: {}", e)))?;

        // 3. JSON 파싱
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse JWT claims: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_payload(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_reads_claims() {
        let token = encode_payload(serde_json::json!({
            "user_id": 42,
            "phone": "+821012345678",
            "exp": 1_900_000_000,
            "iat": 1_899_996_400,
        }));

        let claims = AccessClaims::decode(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.phone, "+821012345678");
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn test_decode_rejects_malformed_token() {
        assert!(matches!(
            AccessClaims::decode("no-dots-here"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            AccessClaims::decode("a.!!not-base64!!.c"),
            Err(ApiError::Decode(_))
        ));
    }
}
