pub mod app;
pub mod edit;
pub mod file;
