pub mod assets;
pub mod dashboard;
