//! Shared types and logic for the AquaGuard farm dashboard
//!
//! Wire models, derivation and classification used by the native client and
//! the WASM bindings. Nothing in this crate performs I/O.

pub mod classification;
pub mod derive;
pub mod models;
pub mod summary;
pub mod types;
pub mod validation;
pub mod view;

pub use classification::*;
pub use derive::*;
pub use models::*;
pub use summary::*;
pub use types::*;
pub use validation::*;
pub use view::*;
