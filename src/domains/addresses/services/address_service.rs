use crate::domains::addresses::models::{
    AddressCreate, AddressUpdate, AddressesResponse, DeliveryAddress, MessageResponse,
};
use crate::shared::errors::ApiError;
use crate::shared::gateway::ApiGateway;

// 배달 주소 서비스
// Delivery address service
//
// 주소 CRUD의 얇은 래퍼. 좌표는 지도 제공자가 만든 값을 그대로 전달한다.
#[derive(Clone)]
pub struct AddressService {
    gateway: ApiGateway,
}

impl AddressService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// 내 주소 목록 조회
    /// List my delivery addresses
    pub async fn list(&self) -> Result<AddressesResponse, ApiError> {
        self.gateway.get("/addresses").await
    }

    /// 주소 추가
    /// Create an address
    pub async fn create(&self, request: &AddressCreate) -> Result<DeliveryAddress, ApiError> {
        self.gateway.post("/addresses", request).await
    }

    /// 주소 수정 (보낸 필드만 반영)
    /// Update an address (partial)
    pub async fn update(
        &self,
        address_id: u64,
        request: &AddressUpdate,
    ) -> Result<DeliveryAddress, ApiError> {
        self.gateway
            .put(&format!("/addresses/{}", address_id), request)
            .await
    }

    /// 주소 삭제
    /// Delete an address
    pub async fn delete(&self, address_id: u64) -> Result<MessageResponse, ApiError> {
        self.gateway
            .delete(&format!("/addresses/{}", address_id))
            .await
    }

    /// 기본 배달 주소 지정
    /// Mark an address as the default
    pub async fn set_default(&self, address_id: u64) -> Result<MessageResponse, ApiError> {
        self.gateway
            .post(
                &format!("/addresses/{}/default", address_id),
                &serde_json::json!({}),
            )
            .await
    }
}
