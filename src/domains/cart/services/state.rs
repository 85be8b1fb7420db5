// Cart domain state
use crate::domains::cart::services::{CartService, CartStore};
use crate::shared::gateway::ApiGateway;

/// Cart domain state
/// 장바구니 도메인 상태 (로컬 저장소 + 동기화 서비스)
#[derive(Clone)]
pub struct CartState {
    pub cart_store: CartStore,
    pub cart_service: CartService,
}

impl CartState {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            cart_store: CartStore::new(),
            cart_service: CartService::new(gateway),
        }
    }
}
