//! Task persistence and mutation semantics.
//!
//! - `TaskStore`: owns the ordered task list; every successful mutation
//!   is flushed back to the backing file
//! - `Storage` / `FileStorage`: the single-file backend seam
//! - `DecodedContent`: explicit two-tier decode of the on-disk format

mod decode;
mod storage;
mod task_store;

pub use decode::{decode, DecodedContent};
pub use storage::{FileStorage, Storage};
pub use task_store::{LoadSource, TaskStore};
