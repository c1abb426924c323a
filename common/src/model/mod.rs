pub mod config;
pub mod payload;
pub mod record;
pub mod region;
