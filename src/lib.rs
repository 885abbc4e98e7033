//! The `taskpad` library crate.
//!
//! Contains the domain models, validation rules, authentication primitives,
//! routing configuration, and error handling for the Taskpad API. The binary
//! (`main.rs`) wires these together into a running HTTP server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
