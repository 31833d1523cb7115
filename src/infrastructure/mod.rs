pub mod observability;
pub mod storage;
pub mod synthesis;
pub mod transcription;
pub mod translation;

mod provider_factory;

pub use provider_factory::{ProviderFactory, Providers};
