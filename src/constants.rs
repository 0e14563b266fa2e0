//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Countries listing endpoint (full list, no query parameters)
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all";

/// Number of cards per page
pub const PAGE_SIZE: usize = 9;

/// How many page numbers are shown on each side of the current page
pub const PAGE_WINDOW: usize = 2;

/// Storage key holding the favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Shown instead of a capital when the country has none
pub const CAPITAL_PLACEHOLDER: &str = "N/A";

/// Detail page that receives the country name as `?name=`
pub const EXPLORE_PAGE: &str = "pais.html";

/// Empty-state message for a search without results
pub const EMPTY_RESULTS_MESSAGE: &str = "Oops! We couldn't find any results for your search.";

/// Alert shown when local storage cannot be used
pub const STORAGE_UNAVAILABLE_MESSAGE: &str =
    "Local storage is not working on this system. The favorites feature is not available!";

/// Config/data directory name under the home directory
pub const APP_DIR_NAME: &str = ".countries-tui";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "countries-tui.log";

/// Application name
pub const APP_NAME: &str = "Countries TUI";
