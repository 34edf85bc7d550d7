// Domain layer - core types and pure logic
pub mod air_quality;
pub mod city;
pub mod dashboard;
pub mod filter;
pub mod geo;
pub mod timeseries;
