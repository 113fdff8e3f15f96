//! Utility functions

pub mod case;
pub mod time;

pub use case::{camel_to_snake, snake_to_camel, snake_to_camel_deep};
pub use time::{is_past, now_utc, time_until};
