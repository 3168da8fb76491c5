//! App-wide constants.
//!
//! Centralises the tool name, resource paths, config paths, environment
//! variable names, and page copy so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "board";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.board.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".board.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "board";

/// Default local directory holding the `json/` resources.
pub const DEFAULT_DATA_DIR: &str = "public";

// ── Static resources ────────────────────────────────────────────────

pub const USERS_RESOURCE: &str = "/json/users.json";
pub const PRODUCTS_RESOURCE: &str = "/json/products.json";

// ── Page copy ───────────────────────────────────────────────────────

pub const LOGIN_ERROR: &str = "Wrong ID or Password!";
pub const LOGIN_PROMPT: &str = "Please Sign in!";
pub const NO_USERS: &str = "No users found...";
pub const NO_PRODUCTS: &str = "No products found...";

pub const REPOSITORY_URL: &str = "https://github.com/paicit0/board";
pub const COPYRIGHT: &str = "© 2024 BOARD. All rights reserved.";
pub const FEATURES_ROUTE: &str = "/patch";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "BOARD_BASE_URL";
pub const ENV_DATA_DIR: &str = "BOARD_DATA_DIR";
pub const ENV_SORT: &str = "BOARD_SORT";
pub const ENV_LOG: &str = "BOARD_LOG";
