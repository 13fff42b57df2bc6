//! Core module
//!
//! Contains the engine's business logic:
//! - `traits`: the journal store contract and the posted-line read view
//! - `store`: the in-memory journal store
//! - `poster`: entry validation and atomic posting
//! - `classifier`: balance-sheet section and bucket classification
//! - `engine`: derived report aggregation

pub mod classifier;
pub mod engine;
pub mod poster;
pub mod store;
pub mod traits;

pub use classifier::{classify, Classification};
pub use engine::ReportBuilder;
pub use poster::EntryPoster;
pub use store::MemoryJournal;
pub use traits::{JournalStore, PostedLine};
