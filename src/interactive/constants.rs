//! Constants for the interactive lookup
//!
//! Timing, layout and user-facing strings shared by the state machine,
//! the renderer and the event loop.

// Timing constants
/// Quiet interval after the last edit before a lookup is issued
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// HTTP timeout for a single lookup
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the Clear button next to the input
pub const CLEAR_BUTTON_WIDTH: u16 = 9;

/// Height of the selected country panel (4 lines plus borders)
pub const COUNTRY_DETAIL_HEIGHT: u16 = 6;

/// Minimum height of the suggestion list
pub const MIN_SUGGESTION_LIST_HEIGHT: u16 = 3;

// Messages
/// Shown when the latest lookup failed
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch suggestions";

/// Shown after the first Ctrl+C
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

/// Placeholder row while a lookup is in flight
pub const LOADING_TEXT: &str = "Loading...";
