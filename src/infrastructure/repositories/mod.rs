pub mod completion_repository;
pub mod openai_completion_repository;

pub use completion_repository::{CompletionError, CompletionOptions, CompletionRepository};
pub use openai_completion_repository::OpenAiCompletionRepository;
