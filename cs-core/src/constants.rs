//! Constants shared across the content store crates.

/// Crate family version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default URL path prefix the content store API lives under.
pub const DEFAULT_URL_PREFIX: &str = "/contentstore";

/// Authorization header scheme expected by the service.
pub const AUTH_SCHEME: &str = "Token";

/// Maximum length of a message set short_name, in characters.
pub const SHORT_NAME_MAX_CHARS: usize = 20;

/// Wildcard value every schedule field defaults to.
pub const SCHEDULE_WILDCARD: &str = "*";

/// Format of ``created_at``/``updated_at`` timestamps, matching the
/// service's observed representation (microsecond precision, no zone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Default client request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;
