//! Domain models
//!
//! Data shapes exchanged with the judge backend.

pub mod contest;
pub mod job;
pub mod problem;
pub mod user;

pub use contest::*;
pub use job::*;
pub use problem::*;
pub use user::*;
