//! Platform-independent core of the double-buffered window template.

pub mod config;
pub mod error;
pub mod events;
pub mod paint;
pub mod pump;
pub mod state;

pub use config::AppConfig;
pub use error::{ConfigError, RenderError};
pub use state::{AppState, ClientSize};
