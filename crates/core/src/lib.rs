//! Core library for the task manager
//!
//! This crate contains the core business logic, including:
//! - The task model and wire representation
//! - The task service contract
//! - The in-memory task store

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
