// Orders domain state
use crate::domains::orders::services::OrderService;
use crate::shared::gateway::ApiGateway;

/// Orders domain state
/// 주문 도메인 상태
#[derive(Clone)]
pub struct OrderState {
    pub order_service: OrderService,
}

impl OrderState {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            order_service: OrderService::new(gateway),
        }
    }
}
