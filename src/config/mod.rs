//! Configuration models for the service and dispatch policy.

pub mod service;

pub use service::ServiceConfig;
