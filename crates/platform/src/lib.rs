//! Platform detection and environment access for xterm-config
//!
//! This crate provides the inputs every default resolver reads:
//! - OS family detection (`win32`, `darwin`, `linux`, `unix`)
//! - Environment sources, live or snapshotted
//! - User data path composition

pub mod context;
pub mod env;
mod error;
pub mod os;
pub mod paths;

pub use context::EnvironmentContext;
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::PlatformError;
pub use os::Os;
pub use paths::{PLUGIN_NAME, user_data_path};
