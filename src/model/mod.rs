pub mod article;
pub mod message;
pub mod result;

pub use article::{ArticleLength, GenerationRequest, TOKENS_PER_WORD};
pub use message::{ChatMessage, Role};
pub use result::CompletionResult;
