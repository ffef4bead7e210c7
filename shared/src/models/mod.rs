//! Wire models exchanged with the AquaGuard backend

mod alert;
mod dashboard;
mod farmer;
mod recommendation;
mod telemetry;

pub use alert::*;
pub use dashboard::*;
pub use farmer::*;
pub use recommendation::*;
pub use telemetry::*;
