//! Client library for the task manager
//!
//! Mirrors the backend task list into local state, including:
//! - An HTTP client for the task API
//! - A persisted snapshot cache consulted before the network
//! - A controller orchestrating load/add/toggle/delete and filtered views

pub mod api;
pub mod cache;
pub mod controller;
pub mod error;

pub use api::{ApiClient, TaskApi};
pub use cache::SnapshotCache;
pub use controller::TaskController;
pub use error::{ClientError, Result};
