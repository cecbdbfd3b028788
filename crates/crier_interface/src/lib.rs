//! Driver traits for external collaborators.
//!
//! These are the seams the orchestrator fans out across and the seams tests
//! mock: one trait per external service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentDriver, ImageDriver};
