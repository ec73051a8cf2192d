pub mod analytics;
pub mod dashboard;
pub mod system;
pub mod vendors;
