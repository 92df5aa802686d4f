//! af-core: shared foundation for the air-flow network crates.
//!
//! Contains:
//! - numeric (Real + finiteness checks + guarded ratios)
//! - ids (grid and node identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{AfError, AfResult};
pub use ids::*;
pub use numeric::*;
