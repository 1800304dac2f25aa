//! Helm Broker Infrastructure Layer
pub mod storage;
