//! Intake and dashboard state machines

pub mod dashboard;
pub mod intake;

pub use dashboard::{DashboardFlow, DashboardState};
pub use intake::{IntakeFlow, IntakeForm, IntakeState, IntakeView};
