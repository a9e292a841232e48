//! # smhw-api
//!
//! An async client for the Satchel One ("Show My Homework") API, covering
//! the student-facing endpoints: todos, task detail, quizzes, calendars,
//! timetables, behaviour and school/user lookups.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! smhw-api = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! anyhow = "1.0"
//! ```
//!
//! Basic usage:
//! ```no_run
//! use smhw_api::{Client, TodoQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::from_credentials("student@example.com", "password", 1234).await?;
//!
//!     println!("Logged in as {}", client.student().full_name());
//!
//!     let todos = client.get_todos(&TodoQuery::default()).await?;
//!     for task in todos.incomplete() {
//!         println!("{} (due {:?})", task.title, task.due_on);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Already have a token? Use [`Client::login`] with the `Bearer `-prefixed
//! token, your user id and school id instead.
//!
//! ## Logging
//!
//! The crate is silent by default. Set `SMHW_LOG=debug` and call
//! [`core::init_from_env`] to see request traces on stderr.

pub mod auth;
pub mod client;
pub mod config;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the types most callers need
pub use auth::{authenticate, Auth};
pub use client::Client;
pub use endpoints::{get_public_schools, StudentInclude, TodoQuery};
pub use error::{ApiError, ApiResult};
pub use models::*;
