//! RustOJ Client - HTTP client layer for the RustOJ online judge
//!
//! This library talks to the judge backend on behalf of a front end: it
//! issues credentialed GET/POST requests, converts between the backend's
//! snake_case keys and the client's camelCase keys, and reads the identity
//! token the backend stores in a cookie.
//!
//! # Architecture
//!
//! - **Client**: base-origin resolution, query strings, request dispatch
//! - **API**: one typed method per backend endpoint
//! - **Models**: DTOs exchanged with the backend
//! - **Token**: unverified read of the identity cookie
//! - **Utils**: key case transcoding and time helpers

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod token;
pub mod utils;

// Re-export commonly used types
pub use client::{Backend, NO_QUERY, query_pairs, to_query_string};
pub use config::{ClientConfig, Environment};
pub use error::{ClientError, ClientResult, Failure};
pub use token::{Token, get_token, urlsafe_base64_decode};
