use serde::Serialize;

/// `{"result": "<12-decimal string>"}`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SupplyResponse {
    pub result: String,
}
