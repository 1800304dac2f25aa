#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::{MockAddonConverter, MockAddonStorage, PendingAddonStorage};
