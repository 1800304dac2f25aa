pub mod catalog;
pub mod health;

pub use catalog::get_catalog;
pub use health::health_check;
