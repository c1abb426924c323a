pub mod data_sources;
pub mod sites;
pub mod toast;
