//! AquaGuard farm dashboard client
//!
//! Drives the intake and dashboard flows against the AquaGuard backend and
//! produces the view model the presentation layer renders.

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod flows;
pub mod navigation;
pub mod notification;

pub use config::Config;
pub use error::{ApiError, ClientError, ClientResult};
