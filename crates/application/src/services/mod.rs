pub mod addon_to_service_converter;

pub use addon_to_service_converter::AddonToServiceConverter;
