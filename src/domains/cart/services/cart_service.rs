use crate::domains::cart::models::{CartSyncRequest, CartSyncResponse};
use crate::domains::cart::services::CartStore;
use crate::shared::errors::ApiError;
use crate::shared::gateway::ApiGateway;

// 장바구니 동기화 서비스
// Cart sync service
//
// 로컬 장바구니의 스냅샷을 서버로 보내는 얇은 래퍼.
// (다른 기기에서 이어서 주문할 수 있게 서버에도 장바구니를 둔다)
#[derive(Clone)]
pub struct CartService {
    gateway: ApiGateway,
}

impl CartService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// 장바구니 스냅샷을 서버에 동기화
    /// Push the current cart snapshot to the backend
    pub async fn sync(&self, store: &CartStore) -> Result<CartSyncResponse, ApiError> {
        let request = CartSyncRequest {
            lines: store.lines(),
        };
        self.gateway.put("/cart", &request).await
    }
}
