// Menu domain state
use crate::domains::menu::services::MenuService;
use crate::shared::gateway::ApiGateway;

/// Menu domain state
/// 메뉴 도메인 상태
#[derive(Clone)]
pub struct MenuState {
    pub menu_service: MenuService,
}

impl MenuState {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            menu_service: MenuService::new(gateway),
        }
    }
}
