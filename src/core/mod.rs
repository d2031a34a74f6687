pub mod client;
pub mod fetch;
pub mod params;
pub mod signer;
pub mod url_builder;

pub use crate::domain::model::{MapsResponse, Service};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
