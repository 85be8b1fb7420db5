use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domains::auth::models::{RefreshRequest, RefreshResponse};
use crate::shared::config::ClientConfig;
use crate::shared::errors::{ApiError, RefreshError};
use crate::shared::gateway::refresh::{RefreshCoordinator, RefreshOutcome, RefreshTicket};
use crate::shared::gateway::request::ApiRequest;
use crate::shared::session::SessionStore;

/// 요청당 재시도 예산: refresh 후 재시도는 1회까지만
/// Per-request retry budget: at most one retry after a refresh
const RETRY_BUDGET: u8 = 1;

/// Follower가 leader의 타임아웃 위에 더 기다려주는 여유 시간
/// Grace margin a follower waits beyond the leader's own timeout
const FOLLOWER_GRACE: Duration = Duration::from_secs(1);

// 인증 요청 게이트웨이
// Authenticated request gateway
//
// 역할: axios instance + 401 interceptor 같은 것
// - 모든 발신 요청에 현재 access token을 Bearer 헤더로 붙인다
// - 401이 오면 refresh를 정확히 한 번만 수행하고 (single-flight),
//   그 사이 실패한 요청들은 같은 결과를 기다렸다가 새 토큰으로 재시도한다
// - refresh가 불가능하면 세션을 제거한다 (fail closed)
// - 401이 아닌 에러는 이 컴포넌트를 그냥 통과한다
#[derive(Clone)]
pub struct ApiGateway {
    http_client: reqwest::Client,
    base_url: String,
    session: SessionStore,
    coordinator: Arc<RefreshCoordinator>,
    refresh_timeout: Duration,
}

impl ApiGateway {
    /// 게이트웨이 생성
    /// Create the gateway
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            session,
            coordinator: Arc::new(RefreshCoordinator::new()),
            refresh_timeout: config.refresh_timeout,
        })
    }

    /// 요청 전송 (인증 + 401 처리 포함)
    /// Send a request with bearer injection and authorization-failure handling
    ///
    /// 처리 흐름:
    /// 1. 현재 access token을 Bearer 헤더로 첨부해서 전송
    /// 2. 401이 아니면 그대로 반환 (성공이든 다른 에러든)
    /// 3. 401이면 single-flight refresh에 참여하고, 받은 새 토큰으로 1회 재시도
    /// 4. 재시도 예산을 이미 다 썼으면 SessionExpired
    pub async fn send(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let mut retries = 0u8;
        let mut access_token = self.session.access_token();

        loop {
            let response = self.execute(&request, access_token.as_deref()).await?;

            match Self::check_status(response).await {
                // 401만 이 컴포넌트가 처리하고, 나머지는 그대로 전달
                Err(ApiError::Unauthorized) => {}
                other => return other,
            }

            // 재시도 예산 확인 (원 요청당 refresh는 1번까지만 유발)
            if retries >= RETRY_BUDGET {
                debug!(
                    "[Gateway] Retry budget exhausted for {} {}",
                    request.method, request.path
                );
                return Err(ApiError::SessionExpired);
            }
            retries += 1;

            // Single-flight refresh에 참여
            // 재시도는 저장소가 아니라 refresh 결과의 토큰을 직접 쓴다 (stale 토큰 방지)
            access_token = Some(self.refresh_access_token().await?);
        }
    }

    /// GET 요청 + JSON 응답 파싱
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::get(path)).await?;
        Self::parse_json(response).await
    }

    /// POST 요청 + JSON 응답 파싱
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::post(path).with_json(body)?).await?;
        Self::parse_json(response).await
    }

    /// PUT 요청 + JSON 응답 파싱
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::put(path).with_json(body)?).await?;
        Self::parse_json(response).await
    }

    /// DELETE 요청 + JSON 응답 파싱
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::delete(path)).await?;
        Self::parse_json(response).await
    }

    /// 실제 HTTP 요청 실행 (토큰 첨부)
    /// Execute the HTTP request with the given token attached
    async fn execute(
        &self,
        request: &ApiRequest,
        access_token: Option<&str>,
    ) -> Result<Response, ApiError> {
        // URL 생성
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self.http_client.request(request.method.clone(), &url);

        // Bearer token 첨부 (있을 경우)
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request to {}: {}", url, e)))
    }

    /// HTTP 상태 코드 분류
    /// - 2xx: 그대로 반환
    /// - 401: Unauthorized (refresh 대상)
    /// - 그 외: 상태/본문 그대로 전달
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// JSON 응답 파싱
    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response body: {}", e)))
    }

    /// Access token 갱신 (single-flight)
    ///
    /// 동시에 여러 요청이 401을 받아도 refresh 호출은 정확히 한 번만 나간다.
    /// - Leader: refresh HTTP 호출을 수행하고 결과를 broadcast
    /// - Follower: 진행 중인 refresh의 결과를 기다린다 (새 refresh 호출 없음)
    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        match self.coordinator.join().await {
            RefreshTicket::Leader => {
                let outcome = self.run_refresh().await;
                self.coordinator.complete(outcome.clone()).await;

                match outcome {
                    RefreshOutcome::Refreshed(token) => Ok(token),
                    RefreshOutcome::Failed(err) => Err(err.into()),
                }
            }
            RefreshTicket::Follower(mut rx) => {
                // Leader의 타임아웃 + 여유 시간만큼만 기다린다
                let max_wait = self.refresh_timeout + FOLLOWER_GRACE;

                match tokio::time::timeout(max_wait, rx.recv()).await {
                    Ok(Ok(RefreshOutcome::Refreshed(token))) => Ok(token),
                    Ok(Ok(RefreshOutcome::Failed(err))) => Err(err.into()),
                    // Leader가 결과 없이 사라짐 (채널 닫힘)
                    Ok(Err(_)) => Err(ApiError::RefreshFailed(
                        "Refresh abandoned without outcome".to_string(),
                    )),
                    // 최대 대기 시간 초과: guard를 풀어서 다음 refresh가 가능하게 한다
                    Err(_) => {
                        self.coordinator.expire().await;
                        Err(ApiError::RefreshFailed(
                            "Timed out waiting for in-flight refresh".to_string(),
                        ))
                    }
                }
            }
        }
    }

    /// Leader의 refresh 실행: HTTP 호출 + 세션 갱신/제거
    ///
    /// 세션 상태 변경(갱신이든 제거든)은 leader인 여기서만, 정확히 한 번 일어난다.
    async fn run_refresh(&self) -> RefreshOutcome {
        // 1. Refresh credential 확인 (없으면 호출 없이 즉시 실패)
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.clear();
            return RefreshOutcome::Failed(RefreshError::MissingCredential);
        };

        // 2. Refresh 호출 (제한 시간 포함)
        let result = tokio::time::timeout(
            self.refresh_timeout,
            self.call_refresh_endpoint(&refresh_token),
        )
        .await;

        match result {
            Ok(Ok(response)) => {
                // 3a. 성공: 새 토큰 저장 (rotation된 refresh token 포함)
                self.session
                    .replace(response.access_token.clone(), response.refresh_token);
                debug!("[Gateway] Session refreshed");
                RefreshOutcome::Refreshed(response.access_token)
            }
            Ok(Err(err)) => {
                // 3b. 실패: 세션 제거 (fail closed)
                warn!("[Gateway] Refresh failed: {}", err);
                self.session.clear();
                RefreshOutcome::Failed(err)
            }
            Err(_) => {
                // 3c. 타임아웃: 명시적 실패와 동일하게 처리
                warn!(
                    "[Gateway] Refresh timed out after {:?}",
                    self.refresh_timeout
                );
                self.session.clear();
                RefreshOutcome::Failed(RefreshError::TimedOut)
            }
        }
    }

    /// Refresh 엔드포인트 호출
    ///
    /// 이 요청에는 Bearer 토큰을 붙이지 않는다 (순환 재시도 방지).
    /// 여기서 받은 401은 refresh credential 자체가 거부된 것이므로 복구 불가 -
    /// 새 refresh를 유발하지 않고 그대로 실패로 전달한다.
    async fn call_refresh_endpoint(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshResponse, RefreshError> {
        let url = format!("{}/auth/refresh", self.base_url);
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RefreshError::Network(format!("Failed to send refresh request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefreshError::Rejected(format!("{} - {}", status, body)));
        }

        response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| RefreshError::Network(format!("Failed to parse refresh response: {}", e)))
    }
}
