//! wec-core: shared foundation for the heave simulator.
//!
//! Contains:
//! - numeric (Real, finiteness checks, step counting, grids)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
