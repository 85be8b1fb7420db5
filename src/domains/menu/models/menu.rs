use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 메뉴 카테고리 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    /// 카테고리 ID
    pub id: u64,

    /// 카테고리 이름 (예: "메인", "사이드", "음료")
    /// Category name
    pub name: String,

    /// 표시 순서
    /// Display order
    pub sort_order: u32,
}

// 메뉴 항목 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// 항목 ID
    pub id: u64,

    /// 소속 카테고리 ID
    pub category_id: u64,

    /// 항목 이름
    pub name: String,

    /// 설명 (선택)
    pub description: Option<String>,

    /// 가격 (정밀 계산을 위해 Decimal)
    /// Price (Decimal for precise arithmetic)
    pub price: Decimal,

    /// 주문 가능 여부 (품절이면 false)
    /// Whether the item can currently be ordered
    pub available: bool,
}

// 메뉴 전체 응답 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItem>,
}
