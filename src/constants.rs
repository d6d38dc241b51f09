//! Module for shared constants used across the codebase

/// Output geometry defaults
pub mod layout {
    /// Column at which fill-mode paragraphs are wrapped
    pub const DEFAULT_LINE_WIDTH: usize = 75;
    /// Spaces prefixed to every line emitted in no-fill mode
    pub const DEFAULT_PREFORMAT_INDENT: usize = 4;
    /// Spaces applied to the body of list items and tagged paragraphs
    pub const DEFAULT_LIST_INDENT: usize = 4;
}

/// Tokens recognized in the man page source
pub mod markup {
    /// Control character introducing a macro line
    pub const CONTROL_CHAR: char = '.';
    /// Prefix of a comment line
    pub const COMMENT_PREFIX: &str = ".\\\"";
    /// `IP` tags rendered as a bullet item
    pub const BULLET_ESCAPES: [&str; 2] = ["\\(bu", "\\(em"];
    /// Marker emitted for bulleted `IP` items
    pub const BULLET_MARKER: &str = "*";
    /// Marker emitted in front of a `TP` tag
    pub const TAG_MARKER: &str = "*  ";
}

pub mod config {
    /// Configuration file name
    pub const DEFAULT_CONF_FILE: &str = "man2md.toml";
    /// Environment variable overriding the configuration directory
    pub const CONFIG_DIR_ENV: &str = "MAN2MD_CONFIG_DIR";
    /// Environment variable enabling debug output
    pub const DEBUG_ENV: &str = "MAN2MD_DEBUG";
}
