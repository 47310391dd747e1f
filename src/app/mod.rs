pub mod commands;

mod config;
mod context;

pub use config::{FrameworkConfig, LoggingConfig, PathsConfig, PreloadConfig};
pub use context::AppContext;
