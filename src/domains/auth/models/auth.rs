use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::auth::models::user::UserResponse;

// OTP 발송 요청 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct OtpRequest {
    /// 휴대폰 번호 (E.164 형식)
    /// Phone number (E.164 format)
    pub phone: String,
}

// OTP 발송 응답 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct OtpRequestResponse {
    /// 안내 메시지
    /// Status message
    pub message: String,

    /// OTP 유효 시간 (초)
    /// OTP validity window in seconds
    pub expires_in_seconds: u64,
}

// OTP 검증 요청 모델 (로그인)
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// 휴대폰 번호
    /// Phone number
    pub phone: String,

    /// 수신한 OTP 코드
    /// Received OTP code
    pub code: String,
}

// OTP 검증 응답 모델 (로그인 성공)
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    /// 사용자 정보
    /// User information
    pub user: UserResponse,

    /// JWT Access Token (짧은 수명)
    /// JWT access token (short lifetime)
    pub access_token: String,

    /// Refresh Token (긴 수명)
    /// Refresh token (long lifetime)
    pub refresh_token: String,

    /// 성공 메시지
    /// Success message
    pub message: String,
}

// 토큰 갱신 요청 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: String,
}

// 토큰 갱신 응답 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// 새 Access Token
    /// New access token
    pub access_token: String,

    /// Rotation된 새 Refresh Token (서버가 rotation하지 않으면 없음)
    /// Rotated refresh token (absent when the server does not rotate)
    pub refresh_token: Option<String>,
}

// 로그아웃 요청 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: String,
}

/// 세션 상태 (UI 표시용)
/// Session status (for display)
#[derive(Debug, Clone)]
pub struct SessionStatus {
    /// 로그인 여부
    /// Whether a session exists
    pub authenticated: bool,

    /// Access token 만료 시각 (디코딩 가능했을 경우)
    /// Access token expiry (when it could be decoded)
    pub expires_at: Option<DateTime<Utc>>,
}
