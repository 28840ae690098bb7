pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::sns::SnsPublisher;
pub use config::NotifierConfig;
pub use crate::core::{handler::handle_event, notifier::Notifier};
pub use utils::error::{NotifierError, Result};
