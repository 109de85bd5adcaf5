pub mod error;
pub mod model;
pub mod prompt;
pub mod service;

pub use error::GenerationError;
pub use model::{GenerateRequest, GenerateResponse, Reply};
pub use service::{GenerationService, GenerationServiceApi};
