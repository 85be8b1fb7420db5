use reqwest::Method;
use serde::Serialize;

use crate::shared::errors::ApiError;

/// 발신 요청 기술
/// Outbound request description
///
/// 역할: axios의 request config 같은 것 (method, path, body, headers)
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,

    /// Base URL 뒤에 붙는 경로 (예: "/menu")
    /// Path appended to the base URL (e.g. "/menu")
    pub path: String,

    /// JSON body (선택)
    pub body: Option<serde_json::Value>,

    /// 추가 헤더 (선택)
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// JSON body 설정
    /// Attach a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Encode(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// 추가 헤더 설정
    /// Attach an extra header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}
