use anyhow::Result;

use crate::domains::addresses::services::AddressState;
use crate::domains::auth::services::AuthState;
use crate::domains::cart::services::CartState;
use crate::domains::menu::services::MenuState;
use crate::domains::orders::services::OrderState;
use crate::shared::config::ClientConfig;
use crate::shared::gateway::ApiGateway;
use crate::shared::session::SessionStore;

/// 스토어프론트 클라이언트 (모든 도메인 상태를 조합)
/// Storefront client (combines all domain states)
///
/// 역할: 앱의 root store에서 모든 Service를 주입하는 것과 유사
/// 세션 저장소와 게이트웨이는 하나씩만 만들어서 전 도메인이 공유한다.
#[derive(Clone)]
pub struct StorefrontClient {
    /// 세션 저장소 (공유)
    /// Session store (shared)
    pub session: SessionStore,

    /// 인증 요청 게이트웨이 (공유)
    /// Authenticated request gateway (shared)
    pub gateway: ApiGateway,

    pub auth_state: AuthState,
    pub menu_state: MenuState,
    pub cart_state: CartState,
    pub order_state: OrderState,
    pub address_state: AddressState,
}

impl StorefrontClient {
    /// 설정으로 클라이언트 생성 (모든 Service 초기화)
    /// Create the client from configuration (initializes every service)
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // 1. 공유 상태 생성 (세션 + 게이트웨이)
        let session = SessionStore::new();
        let gateway = ApiGateway::new(config, session.clone())?;

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(gateway.clone(), session.clone());
        let menu_state = MenuState::new(gateway.clone());
        let cart_state = CartState::new(gateway.clone());
        let order_state = OrderState::new(gateway.clone());
        let address_state = AddressState::new(gateway.clone());

        // 3. 조합
        Ok(Self {
            session,
            gateway,
            auth_state,
            menu_state,
            cart_state,
            order_state,
            address_state,
        })
    }

    /// 환경 변수 설정으로 생성
    /// Create from environment-variable configuration
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(&config)
    }
}
