//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Usage text for the demo `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Kanban";

/// Prompt shown in front of demo terminal input.
pub const DEMO_PROMPT: &str = "demo@kanban";

/// Script replayed into the demo terminal on first render.
pub const DEMO_SCRIPT: &[&str] = &["kanban board get 1"];

// =============================================================================
// Network Configuration
// =============================================================================

/// Prefix for every REST endpoint. Empty means same origin as the page.
pub const API_BASE: &str = "";

/// Message used when a failed response carries no `detail` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

// =============================================================================
// Client Storage
// =============================================================================

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// localStorage key holding the theme preference.
pub const THEME_KEY: &str = "kanban-theme";

// =============================================================================
// Theme Configuration
// =============================================================================

/// Class toggled on `<html>` when the resolved theme is dark.
pub const DARK_CLASS: &str = "dark";

/// Media query used to read the OS color-scheme preference.
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 500;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 50;
