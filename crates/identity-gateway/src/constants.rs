//! Gateway endpoint constants
//!
//! The gateway exposes four POST endpoints under a single base path. The base
//! can be overridden per client (staging, tests); the sub-paths are fixed.

/// Production gateway base URL, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://id.gateway-provider.com/api/gateway";

/// Ephemeral token → access token exchange
pub const ACCESS_TOKEN_PATH: &str = "/access-token";

/// User profile retrieval
pub const GET_USER_PATH: &str = "/get-user";

/// Access token revocation
pub const REVOKE_TOKEN_PATH: &str = "/revoke-token";

/// Push notification dispatch
pub const NOTIFY_PATH: &str = "/notify";
