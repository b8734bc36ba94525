pub mod analytics;
pub mod cache;
pub mod domain;
pub mod error;
pub mod report;
pub mod seed;
pub mod store;
