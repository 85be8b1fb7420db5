use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::cart::models::CartLine;

/// 결제 수단
/// Payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
    Wallet,
}

// 주문 생성 요청 모델 (체크아웃)
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// 요청 추적용 고유 ID (재전송 시 중복 주문 방지)
    /// Unique request id (prevents duplicate orders on resend)
    pub request_id: Uuid,

    /// 배달 주소 ID
    pub address_id: u64,

    /// 결제 수단
    pub payment_method: PaymentMethod,

    /// 주문 줄 목록 (장바구니 스냅샷)
    pub lines: Vec<CartLine>,
}

/// 주문 상태
/// Order status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

// 주문 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 주문 ID
    pub id: u64,

    /// 주문 상태
    pub status: OrderStatus,

    /// 주문 줄 목록
    pub lines: Vec<CartLine>,

    /// 총액 (배달비/할인 반영, 서버가 계산)
    /// Total (server-computed, includes fees and discounts)
    pub total: Decimal,

    /// 주문 시각
    pub created_at: DateTime<Utc>,
}

// 주문 목록 응답 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

// 결제 세션 모델 (결제 제공자 정보, 그대로 전달)
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentSession {
    /// 대상 주문 ID
    pub order_id: u64,

    /// 결제 제공자 redirect URL
    /// Payment-provider redirect URL
    pub redirect_url: String,
}
