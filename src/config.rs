// Satchel One API constants

/// Base URL for all authenticated API endpoints
pub const DEFAULT_API_BASE: &str = "https://api.satchelone.com/api";

/// OAuth token endpoint used by the password grant
pub const AUTH_TOKEN_URL: &str = "https://api.satchelone.com/oauth/token";

/// Versioned media type the API expects on every request
pub const ACCEPT_HEADER: &str = "application/smhw.v2021.5+json";

/// Request timeout in seconds
pub const TIMEOUT_SECONDS: u64 = 15;

// OAuth application credentials shipped with the official web client.
// Sent as query parameters when exchanging a username/password for a token.
pub const CLIENT_ID: &str = "55283c8c45d97ffd88eb9f87e13f390675c75d22b4f2085f43b0d7355c1f";
pub const CLIENT_SECRET: &str = "c8f7d8fcd0746adc50278bc89ed6f004402acbbf4335d3cb12d6ac6497d3";

/// Default window added to `from` when no `to` date is given for a todo query
pub const TODO_WINDOW_WEEKS: i64 = 3;

/// API base URL, overridable for testing against a local stand-in
pub fn api_base() -> String {
    std::env::var("SMHW_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Token endpoint URL, overridable alongside the API base
pub fn auth_token_url() -> String {
    std::env::var("SMHW_AUTH_URL").unwrap_or_else(|_| AUTH_TOKEN_URL.to_string())
}
