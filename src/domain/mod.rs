//! Domain layer: the layout tree and queries over it
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod entities;
pub mod error;
pub mod layout;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use layout::{Document, SummaryItem, PROJECT_DOCUMENT, PROJECT_LAYOUT, PROJECT_SUMMARY};
