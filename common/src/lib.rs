//! Shared model and wizard core for the report builder.
//!
//! Everything here is UI-agnostic: the frontend renders what these types
//! expose and forwards user input back into them, and the backend host only
//! borrows the configuration types.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod permissions;
pub mod requests;
pub mod stages;
pub mod wizard;

pub use error::WizardError;
pub use gateway::{GatewayError, ReportGateway};
