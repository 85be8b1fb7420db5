use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::domains::auth::models::AccessClaims;

/// 세션 토큰 쌍
/// Session token pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Access Token (짧은 수명, Bearer 인증용)
    /// Access token (short lifetime, bearer credential)
    pub access_token: String,

    /// Refresh Token (긴 수명, refresh 작업 전용)
    /// Refresh token (long lifetime, read only by the refresh operation)
    pub refresh_token: String,

    /// Access token 만료 시각 (토큰의 exp claim에서 디코딩)
    /// Access token expiry (decoded from the token's exp claim)
    pub expires_at: Option<DateTime<Utc>>,
}

// 세션 저장소
// Session store
//
// 역할: 프론트엔드의 auth store (Pinia/Redux) 같은 것
//
// 세션에서 유일하게 변경 가능한 공유 상태. 변경 entry point는 3개뿐이다:
// - store:   로그인 성공 (토큰 쌍 생성)
// - replace: refresh 성공 (access token 교체, rotation된 refresh token 반영)
// - clear:   로그아웃 또는 refresh 실패 (둘 다 제거)
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<TokenPair>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// 로그인 성공 시 토큰 쌍 저장
    /// Store the token pair on successful login
    pub fn store(&self, access_token: String, refresh_token: String) {
        let expires_at = Self::decode_expiry(&access_token);
        *self.inner.write() = Some(TokenPair {
            access_token,
            refresh_token,
            expires_at,
        });
    }

    /// Refresh 성공 시 access token 교체
    /// Replace the access token on successful refresh
    ///
    /// 서버가 refresh token을 rotation했으면 그것도 함께 교체한다.
    /// 세션이 이미 지워진 상태라면 (refresh 중 로그아웃) 되살리지 않는다.
    pub fn replace(&self, access_token: String, rotated_refresh_token: Option<String>) {
        let mut guard = self.inner.write();
        let Some(pair) = guard.as_mut() else {
            return;
        };

        pair.expires_at = Self::decode_expiry(&access_token);
        pair.access_token = access_token;
        if let Some(refresh_token) = rotated_refresh_token {
            pair.refresh_token = refresh_token;
        }
    }

    /// 로그아웃/실패 시 세션 제거
    /// Clear the session on logout or refresh failure
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    /// 현재 access token (없으면 None)
    pub fn access_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|pair| pair.access_token.clone())
    }

    /// 현재 refresh token (refresh 작업에서만 읽는다)
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|pair| pair.refresh_token.clone())
    }

    /// 로그인 상태 여부
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Access token 만료 시각 (UI 표시용)
    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().as_ref().and_then(|pair| pair.expires_at)
    }

    /// 토큰의 exp claim을 만료 시각으로 변환
    /// 디코딩에 실패해도 토큰은 그대로 쓴다 (검증은 서버 몫)
    fn decode_expiry(access_token: &str) -> Option<DateTime<Utc>> {
        AccessClaims::decode(access_token)
            .ok()
            .and_then(|claims| Utc.timestamp_opt(claims.exp, 0).single())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
