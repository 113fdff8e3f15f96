//! Typed backend endpoints
//!
//! Each submodule adds the methods of one resource to [`Backend`](crate::client::Backend),
//! built on the generic `get`/`post` calls.

pub mod contests;
pub mod jobs;
pub mod problems;
pub mod users;

pub use users::LoginResponse;
