mod completion;
mod llm_client;
mod message;
pub mod providers;

pub use completion::*;
pub use llm_client::*;
pub use message::*;
