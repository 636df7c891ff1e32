//! rollcall: REST facade over a MySQL sample database.
//!
//! Each route maps one HTTP method + path to exactly one parameterized SQL
//! statement; results come back as raw JSON rows. No business logic lives
//! here: uniqueness, typing, and referential integrity are the schema's job.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::AppConfig;
pub use db::{connect, ExecStatus};
pub use error::{AppError, ConfigError};
pub use openapi::ApiDoc;
pub use routes::app;
pub use service::RecordService;
pub use state::AppState;
