pub mod catalog;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use catalog::CatalogConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use server::{CliOverrides, ServerConfig};
