// Storefront client core
// 역할: 주문 스토어프론트의 API 레이어 (axios instance + 상태 store 같은 것)
//
// 화면(UI)은 이 크레이트 밖에 있다. 여기는 인증 게이트웨이, 세션/장바구니 상태,
// 백엔드 API의 타입 래퍼만 담당한다.
pub mod domains;
pub mod shared;

pub use shared::config::ClientConfig;
pub use shared::errors::ApiError;
pub use shared::services::StorefrontClient;
