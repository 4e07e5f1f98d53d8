//! Repository layer for saved progress.
//!
//! Repositories hold the one piece of data that outlives a session: the flat
//! [`SaveRecord`](game_core::SaveRecord). Everything else is rebuilt when a
//! level is entered.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileProgressRepository;
pub use memory::InMemoryProgressRepo;
pub use traits::ProgressRepository;
