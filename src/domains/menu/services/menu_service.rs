use crate::domains::menu::models::{MenuItem, MenuResponse};
use crate::shared::errors::ApiError;
use crate::shared::gateway::ApiGateway;

// 메뉴 서비스
// Menu service
//
// 메뉴 조회 API의 얇은 래퍼. 응답 형태는 백엔드가 주는 그대로 전달한다.
#[derive(Clone)]
pub struct MenuService {
    gateway: ApiGateway,
}

impl MenuService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// 메뉴 전체 조회 (카테고리 + 항목)
    /// Fetch the full menu (categories and items)
    pub async fn get_menu(&self) -> Result<MenuResponse, ApiError> {
        self.gateway.get("/menu").await
    }

    /// 메뉴 항목 상세 조회
    /// Fetch one menu item
    pub async fn get_item(&self, item_id: u64) -> Result<MenuItem, ApiError> {
        self.gateway.get(&format!("/menu/items/{}", item_id)).await
    }
}
