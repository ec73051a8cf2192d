pub mod analytics;
pub mod config;
pub mod data;
pub mod ingest;
pub mod preview;
pub mod remote;
pub mod source;
