pub mod config;
pub mod core;
pub mod domain;
pub mod mail;
pub mod utils;

pub use config::toml_config::RosterConfig;
pub use config::CliConfig;
pub use crate::core::{dispatch::Dispatcher, engine::SantaEngine};
pub use mail::{FileMailer, SmtpMailer};
pub use utils::error::{Result, SantaError};
