// =============================================================================
// STORE API
// =============================================================================

/// Environment variable holding the store base URL
pub const API_BASE_ENV: &str = "STOCK_API_BASE";

/// Base URL used when the environment does not provide one
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

// =============================================================================
// TABLE
// =============================================================================

/// Page sizes the table cycles through with `p`
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Page size on startup
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Width of the order column in characters
pub const ORDER_COL_WIDTH: usize = 8;

/// Width of the per-row action hints column in characters
pub const ACTION_COL_WIDTH: usize = 14;

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Poll interval for events in milliseconds
pub const EVENT_POLL_MS: u64 = 8;

/// Minimum time between renders (ms) - caps at ~28fps
pub const RENDER_THROTTLE_MS: u64 = 36;

// =============================================================================
// UI CHARACTERS
// =============================================================================

pub mod chars {
    pub const HORIZONTAL: &str = "─";
    pub const ARROW_RIGHT: &str = "▸";
}
