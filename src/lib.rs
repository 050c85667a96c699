pub mod cli;
pub mod error;
pub mod store;
pub mod task;

pub use cli::{Cli, Display, MenuSession};
pub use error::{Result, TaskpadError};
pub use store::{DecodedContent, FileStorage, LoadSource, Storage, TaskStore};
pub use task::{Task, TaskStats};
