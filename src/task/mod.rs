//! Core task domain types.
//!
//! - `Task`: one to-do entry with description, completion flag, and
//!   creation timestamp
//! - `TaskStats`: aggregate counts and completion rate

mod record;
mod stats;

pub use record::{Task, CREATED_FORMAT};
pub use stats::TaskStats;
