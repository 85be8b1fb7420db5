use serde::{Deserialize, Serialize};

// 배달 주소 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// 주소 ID
    pub id: u64,

    /// 표시용 이름 (예: "집", "회사")
    /// Display label (e.g. "home", "work")
    pub label: String,

    /// 도로명 주소
    /// Street address
    pub street: String,

    /// 상세 주소 (동/호수 등, 선택)
    /// Address detail (unit/floor, optional)
    pub detail: Option<String>,

    /// 위도 (지도 제공자가 채움, 그대로 전달)
    /// Latitude (filled by the maps provider, passed through)
    pub lat: f64,

    /// 경도
    /// Longitude
    pub lng: f64,

    /// 기본 배달 주소 여부
    /// Whether this is the default delivery address
    pub is_default: bool,
}

// 주소 생성 요청 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct AddressCreate {
    pub label: String,
    pub street: String,
    pub detail: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

// 주소 수정 요청 모델 (부분 수정, 보낸 필드만 반영)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

// 주소 목록 응답 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct AddressesResponse {
    pub addresses: Vec<DeliveryAddress>,
}

// 메시지 응답 모델 (삭제/기본 지정 등)
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// 성공 메시지
    /// Success message
    pub message: String,
}
