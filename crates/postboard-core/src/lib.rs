//! # Postboard Core
//!
//! The domain layer of the posts client.
//! This crate contains the controller, the render engine and the ports the
//! infrastructure and UI layers implement. It performs no I/O of its own.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;
pub mod render;
pub mod rows;

pub use controller::PostsController;
pub use error::{DomainError, Notice, StoreError};
