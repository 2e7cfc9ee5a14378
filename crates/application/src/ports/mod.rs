pub mod supply_rpc;

pub use supply_rpc::SupplyRpcClient;
