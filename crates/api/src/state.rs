use coin_supply_application::use_cases::GetSupplyUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_supply: Arc<GetSupplyUseCase>,
}
