/// ublog system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on the page size a caller may request.
pub const DEFAULT_MAX_PAGE_LIMIT: u32 = 20;

/// Session lifetime: one hour.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Default number of read connections in the storage pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Maximum accepted post title length.
pub const MAX_TITLE_LEN: usize = 255;

/// Length of the snippet exposed for list rendering.
pub const SNIPPET_LEN: usize = 100;
