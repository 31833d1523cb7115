mod store_factory;
mod store_gateway;

pub use store_factory::StoreFactory;
pub use store_gateway::StoreGateway;
