//! Core types for fba-sync.

pub mod cell;
pub mod outcome;
pub mod row;
pub mod source;

pub use cell::Cell;
pub use outcome::FetchOutcome;
pub use row::{Row, ToRow};
pub use source::SourceKind;
