//! CLI command implementations.

pub mod export;
pub mod interactive;
pub mod search;

pub use export::{ExportCommand, ExportOutcome};
pub use interactive::InteractiveSession;
pub use search::SearchCommand;
