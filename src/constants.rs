//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BACKEND DEFAULTS
// =============================================================================

/// Base origin used in development (the backend's default bind address)
pub const DEFAULT_DEV_API_BASE: &str = "http://localhost:12345";

/// Base origin used in production (same origin as the caller)
pub const DEFAULT_PROD_API_BASE: &str = "";

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Selects `development` or `production`
pub const ENV_ENVIRONMENT: &str = "RUSTOJ_ENV";

/// Overrides the base origin regardless of environment
pub const ENV_API_BASE: &str = "RUSTOJ_API_BASE";

/// Token value the CLI seeds into its cookie jar
pub const ENV_TOKEN: &str = "RUSTOJ_TOKEN";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Name of the cookie carrying the compact identity token
pub const TOKEN_COOKIE_NAME: &str = "rustoj-token";

// =============================================================================
// API ROUTES
// =============================================================================

/// Backend route paths
pub mod routes {
    pub const GREET: &str = "/greet";
    pub const JOBS: &str = "/jobs";
    pub const USERS: &str = "/users";
    pub const LOGIN: &str = "/users/login";
    pub const CONTESTS: &str = "/contests";
    pub const PROBLEMS: &str = "/problems";

    /// Contest id that addresses the global ranklist
    pub const GLOBAL_CONTEST_ID: i32 = 0;
}
