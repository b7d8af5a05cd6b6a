//! PolyDraw Application
//!
//! The application shell: windowing, input routing, the console command
//! thread and configuration.

#[cfg(feature = "native")]
mod app;
pub mod config;
pub mod console;
mod shortcuts;

#[cfg(feature = "native")]
pub use app::App;
pub use config::{AppConfig, ConfigError, ConfigResult};
pub use shortcuts::{Shortcut, ShortcutRegistry};
