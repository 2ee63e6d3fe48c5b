pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, DropRouting, IdStrategy};
pub use error::KanbanError;
pub use result::KanbanResult;
