// Addresses domain state
use crate::domains::addresses::services::AddressService;
use crate::shared::gateway::ApiGateway;

/// Addresses domain state
/// 배달 주소 도메인 상태
#[derive(Clone)]
pub struct AddressState {
    pub address_service: AddressService,
}

impl AddressState {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            address_service: AddressService::new(gateway),
        }
    }
}
