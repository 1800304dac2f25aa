mod config;
mod logging;
mod storage;

pub use config::{config_source, load_config};
pub use logging::init_logging;
pub use storage::init_storage;
