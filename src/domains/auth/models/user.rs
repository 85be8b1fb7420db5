use serde::{Deserialize, Serialize};

/// 사용자 정보 (API 응답용)
/// User information (API response)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 사용자 ID
    /// User ID
    pub id: u64,

    /// 휴대폰 번호 (E.164 형식)
    /// Phone number (E.164 format)
    pub phone: String,

    /// 이름 (선택)
    /// Display name (optional)
    pub name: Option<String>,
}
