mod addon_converter;
mod addon_storage;

pub use addon_converter::AddonConverter;
pub use addon_storage::AddonStorage;
