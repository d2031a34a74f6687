pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use config::MapsConfig;
pub use core::client::MapsClient;
pub use domain::model::{MapsResponse, Service};
pub use domain::ports::ConfigProvider;
pub use utils::error::{MapsError, Result};
