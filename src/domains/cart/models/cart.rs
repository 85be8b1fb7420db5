use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 장바구니 한 줄 모델 (메뉴 항목 + 수량)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// 메뉴 항목 ID
    pub item_id: u64,

    /// 항목 이름 (담은 시점의 스냅샷)
    /// Item name (snapshot at add time)
    pub name: String,

    /// 단가 (담은 시점의 가격 스냅샷)
    /// Unit price (snapshot at add time)
    pub unit_price: Decimal,

    /// 수량
    pub quantity: u32,
}

impl CartLine {
    /// 줄 합계 (단가 × 수량)
    /// Line total (unit price × quantity)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

// 장바구니 파생 합계 모델
// 저장하지 않고 줄 목록에서 매번 파생시킨다
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// 총 수량
    /// Total item count
    pub item_count: u32,

    /// 소계
    /// Subtotal
    pub subtotal: Decimal,
}

// 서버 동기화 요청 모델 (장바구니 스냅샷)
#[derive(Debug, Serialize, Deserialize)]
pub struct CartSyncRequest {
    pub lines: Vec<CartLine>,
}

// 서버 동기화 응답 모델
#[derive(Debug, Serialize, Deserialize)]
pub struct CartSyncResponse {
    /// 성공 메시지
    /// Success message
    pub message: String,
}
