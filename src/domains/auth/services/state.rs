// Auth domain state
// 인증 도메인 상태
use crate::domains::auth::services::AuthService;
use crate::shared::gateway::ApiGateway;
use crate::shared::session::SessionStore;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
}

impl AuthState {
    /// Create AuthState with the shared gateway and session store
    /// AuthState 생성 (공유 게이트웨이와 세션 저장소 필요)
    pub fn new(gateway: ApiGateway, session: SessionStore) -> Self {
        Self {
            auth_service: AuthService::new(gateway, session),
        }
    }
}
