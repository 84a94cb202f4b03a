pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod enrollment;
pub mod error;
pub mod state;

pub type IoResult<T> = std::io::Result<T>;
pub type MergingtonError = Box<dyn std::error::Error + Send + Sync>;
pub type MergingtonResult<T> = Result<T, MergingtonError>;
