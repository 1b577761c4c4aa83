//! Domain primitives shared by the catalog store and the HTTP layer.
//!
//! Has no internal dependencies so it can be used from any crate in the
//! workspace.

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;
