mod error;
mod health;
mod translate;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use translate::{TranslationResponse, translate_handler};
