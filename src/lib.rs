pub mod diagnostics;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod registry;
pub mod rest;
