//! Error types for the Crier library.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use crier_error::{CrierResult, GenerationError, GenerationErrorKind};
//!
//! fn call_upstream() -> CrierResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::Http(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match call_upstream() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod generation;
mod image;
mod orchestrator;
mod validation;

pub use error::{CrierError, CrierErrorKind, CrierResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use image::{ImageError, ImageErrorKind};
pub use orchestrator::{OrchestratorError, OrchestratorErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
