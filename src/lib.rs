//! CityPulse service library
//!
//! Exposes the domain logic (AQI classification, map projection, filter
//! state), the application use cases (city aggregation and services), and
//! the infrastructure adapters for use by the service binary and by
//! integration tests.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
