//! Types module
//!
//! Contains core data structures used throughout the library.
//! This module organizes types into logical submodules:
//! - `neo`: Near-Earth object descriptor
//! - `approach`: Close approach records
//! - `error`: Error types for the export library

pub mod approach;
pub mod error;
pub mod neo;

pub use approach::CloseApproach;
pub use error::ExportError;
pub use neo::NearEarthObject;
