//! # Postboard Shared
//!
//! Wire types exchanged with the hosted posts table.
//! Kept free of I/O so any front end (terminal or WASM) can reuse them.

pub mod dto;
pub mod response;

pub use response::ApiErrorBody;
