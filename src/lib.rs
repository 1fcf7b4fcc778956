//! Data layer for a multi-step blog-content-production checklist tool.
//!
//! A fixed step catalog with per-step user outputs, a library of prompt and
//! tool definitions assignable to steps, a single site-profile record, and a
//! placeholder-substitution engine, all persisted to a local SQLite
//! key-value table. The presentation layer constructs an [`App`] and calls
//! through its services.

pub mod app;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use app::App;
pub use error::StoreError;
