//! Command implementations.

pub mod config;
pub mod process;

pub use self::config::execute_config;
pub use self::process::{execute_process, ProcessArgs};
