use crate::domains::auth::models::{
    LogoutRequest, OtpRequest, OtpRequestResponse, SessionStatus, VerifyOtpRequest,
    VerifyOtpResponse,
};
use crate::shared::errors::ApiError;
use crate::shared::gateway::ApiGateway;
use crate::shared::session::SessionStore;

// 인증 서비스
// Authentication service
//
// 역할: 프론트엔드의 auth store 액션 같은 것 (OTP 로그인/로그아웃)
// 토큰 refresh는 여기가 아니라 게이트웨이가 알아서 처리한다.
#[derive(Clone)]
pub struct AuthService {
    gateway: ApiGateway,
    session: SessionStore,
}

impl AuthService {
    pub fn new(gateway: ApiGateway, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// OTP 발송 요청
    /// Request an OTP code for the given phone number
    pub async fn request_otp(&self, phone: &str) -> Result<OtpRequestResponse, ApiError> {
        let request = OtpRequest {
            phone: phone.to_string(),
        };
        self.gateway.post("/auth/otp/request", &request).await
    }

    /// OTP 검증 (로그인)
    /// Verify the OTP code and sign in
    ///
    /// 성공하면 토큰 쌍이 세션 저장소에 저장된다 (세션 생성).
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<VerifyOtpResponse, ApiError> {
        let request = VerifyOtpRequest {
            phone: phone.to_string(),
            code: code.to_string(),
        };
        let response: VerifyOtpResponse = self.gateway.post("/auth/otp/verify", &request).await?;

        // 로그인 성공: 토큰 쌍 저장
        self.session.store(
            response.access_token.clone(),
            response.refresh_token.clone(),
        );

        Ok(response)
    }

    /// 로그아웃
    /// Sign out
    ///
    /// 서버측 revoke는 best-effort이고, 로컬 세션은 항상 제거한다.
    pub async fn logout(&self) -> Result<(), ApiError> {
        // 1. 서버에 refresh token revoke 요청
        if let Some(refresh_token) = self.session.refresh_token() {
            let request = LogoutRequest { refresh_token };
            if let Err(e) = self
                .gateway
                .post::<serde_json::Value, _>("/auth/logout", &request)
                .await
            {
                tracing::warn!("[Auth] Server-side logout failed: {}", e);
            }
        }

        // 2. 로컬 세션 제거 (서버 응답과 무관하게)
        self.session.clear();
        Ok(())
    }

    /// 현재 세션 상태 (UI 표시용)
    /// Current session status (for display)
    pub fn session_status(&self) -> SessionStatus {
        SessionStatus {
            authenticated: self.session.is_authenticated(),
            expires_at: self.session.access_expires_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ClientConfig;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn verify_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        assert_eq!(body["phone"], json!("+821012345678"));
        assert_eq!(body["code"], json!("123456"));
        Json(json!({
            "user": { "id": 7, "phone": "+821012345678", "name": "지훈" },
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "message": "Signed in successfully",
        }))
    }

    async fn logout_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        assert_eq!(body["refresh_token"], json!("refresh-1"));
        Json(json!({ "message": "Signed out" }))
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/auth/otp/verify", post(verify_handler))
            .route("/auth/logout", post(logout_handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn service(base_url: &str) -> (AuthService, SessionStore) {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            refresh_timeout: Duration::from_secs(5),
            user_agent: "storefront-client-test".to_string(),
        };
        let session = SessionStore::new();
        let gateway = ApiGateway::new(&config, session.clone()).unwrap();
        (AuthService::new(gateway, session.clone()), session)
    }

    #[tokio::test]
    async fn test_verify_otp_stores_session() {
        let base_url = spawn_backend().await;
        let (auth, session) = service(&base_url);
        assert!(!auth.session_status().authenticated);

        let response = auth.verify_otp("+821012345678", "123456").await.unwrap();
        assert_eq!(response.user.id, 7);

        // 로그인 성공으로 세션이 생성된다
        assert!(auth.session_status().authenticated);
        assert_eq!(session.access_token().as_deref(), Some("access-1"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let base_url = spawn_backend().await;
        let (auth, session) = service(&base_url);
        auth.verify_otp("+821012345678", "123456").await.unwrap();

        auth.logout().await.unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        // 세션이 없어도 로그아웃은 조용히 성공한다
        let base_url = spawn_backend().await;
        let (auth, session) = service(&base_url);

        auth.logout().await.unwrap();
        assert!(!session.is_authenticated());
    }
}
