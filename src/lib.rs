//! mdtask Web UI
//!
//! Browser-side behavior for the server-rendered mdtask task list.

pub mod binder;
pub mod config;
pub mod error;
pub mod filter;
pub mod status;

pub use binder::{initialize, Affordance, BindReport, BOUND_ATTRIBUTE};
pub use config::{load_config, BinderConfig};
pub use error::{UiError, UiResult};
pub use status::Status;
