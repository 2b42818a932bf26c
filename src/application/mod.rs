//! Application layer: input validation and tree use cases
//!
//! Validates raw user input, then calls into the pure domain layer.

pub mod error;
pub mod error_ext;
pub mod request;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use request::{fits_level_range, level_range, TreeRequest};
pub use services::{TreeReport, TreeService};
