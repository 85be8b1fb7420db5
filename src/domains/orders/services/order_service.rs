use uuid::Uuid;

use crate::domains::cart::services::CartStore;
use crate::domains::orders::models::{
    CheckoutRequest, Order, OrdersResponse, PaymentMethod, PaymentSession,
};
use crate::shared::errors::ApiError;
use crate::shared::gateway::ApiGateway;

// 주문 서비스
// Order service
//
// 체크아웃/주문 조회/결제 시작. 금액 계산은 전부 서버 몫이고
// 여기서는 요청을 그대로 전달만 한다.
#[derive(Clone)]
pub struct OrderService {
    gateway: ApiGateway,
}

impl OrderService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// 체크아웃 (주문 생성)
    /// Checkout (create an order)
    ///
    /// request_id는 클라이언트에서 생성한다 - 네트워크 재전송이 생겨도
    /// 서버가 같은 주문으로 인식할 수 있다.
    /// 주문이 생성되면 장바구니를 비운다.
    pub async fn checkout(
        &self,
        address_id: u64,
        payment_method: PaymentMethod,
        cart: &CartStore,
    ) -> Result<Order, ApiError> {
        let request = CheckoutRequest {
            request_id: Uuid::new_v4(),
            address_id,
            payment_method,
            lines: cart.lines(),
        };

        let order: Order = self.gateway.post("/orders", &request).await?;

        // 주문 성공: 장바구니 비우기
        cart.clear();

        Ok(order)
    }

    /// 주문 상세 조회
    /// Fetch one order
    pub async fn get_order(&self, order_id: u64) -> Result<Order, ApiError> {
        self.gateway.get(&format!("/orders/{}", order_id)).await
    }

    /// 내 주문 목록 조회
    /// List my orders
    pub async fn list_orders(&self) -> Result<OrdersResponse, ApiError> {
        self.gateway.get("/orders").await
    }

    /// 결제 시작 (결제 제공자 세션 생성, 그대로 전달)
    /// Initiate payment (creates a payment-provider session, passed through)
    pub async fn initiate_payment(&self, order_id: u64) -> Result<PaymentSession, ApiError> {
        self.gateway
            .post(&format!("/orders/{}/payment", order_id), &serde_json::json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::menu::models::MenuItem;
    use crate::domains::orders::models::OrderStatus;
    use crate::shared::config::ClientConfig;
    use crate::shared::session::SessionStore;
    use axum::routing::post;
    use axum::{Json, Router};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::time::Duration;

    async fn orders_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        // 클라이언트가 request_id와 줄 목록을 보냈는지 확인
        assert!(body["request_id"].is_string());
        assert_eq!(body["payment_method"], json!("card"));
        assert_eq!(body["lines"].as_array().unwrap().len(), 1);

        Json(json!({
            "id": 501,
            "status": "pending",
            "lines": body["lines"],
            "total": "8.50",
            "created_at": "2026-08-05T12:00:00Z",
        }))
    }

    async fn spawn_backend() -> String {
        let app = Router::new().route("/orders", post(orders_handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn service(base_url: &str) -> OrderService {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            refresh_timeout: Duration::from_secs(5),
            user_agent: "storefront-client-test".to_string(),
        };
        let session = SessionStore::new();
        let gateway = ApiGateway::new(&config, session).unwrap();
        OrderService::new(gateway)
    }

    #[tokio::test]
    async fn test_checkout_sends_cart_and_clears_it() {
        let base_url = spawn_backend().await;
        let orders = service(&base_url);

        let cart = CartStore::new();
        cart.add_line(
            &MenuItem {
                id: 1,
                category_id: 1,
                name: "불고기 버거".to_string(),
                description: None,
                price: Decimal::from_f64_retain(8.50).unwrap(),
                available: true,
            },
            1,
        );

        let order = orders
            .checkout(11, PaymentMethod::Card, &cart)
            .await
            .unwrap();

        assert_eq!(order.id, 501);
        assert_eq!(order.status, OrderStatus::Pending);
        // 주문이 생성됐으면 장바구니는 비워진다
        assert!(cart.is_empty());
    }
}
