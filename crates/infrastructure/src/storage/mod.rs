pub mod addon_index;
pub mod memory;

pub use addon_index::{AddonIndex, AddonIndexError};
pub use memory::InMemoryAddonStorage;
