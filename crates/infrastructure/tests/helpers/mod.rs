pub mod builders;

pub use builders::AddonBuilder;
