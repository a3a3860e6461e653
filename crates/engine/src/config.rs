use derive_builder::Builder;

use crate::error::{EngineError, Result};

/// Number of children shown per folder before the listing is clipped.
pub const DISPLAY_LIMIT: usize = 3;

/// Lines of embedded JSON/YAML shown per file in the text report.
pub const MAX_CONTENT_LINES: usize = 40;

/// How immediate children of a folder are enumerated.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub skip_hidden: bool,
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    #[builder(default = "DISPLAY_LIMIT")]
    pub display_limit: usize,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default = "Some(MAX_CONTENT_LINES)")]
    pub max_content_lines: Option<usize>,
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        check_limits(
            self.display_limit.unwrap_or(DISPLAY_LIMIT),
            self.max_depth.flatten(),
        )
    }
}

impl Config {
    /// Rejects settings that would hide every child of every folder.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when `display_limit` or `max_depth`
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        check_limits(self.display_limit, self.max_depth).map_err(EngineError::Config)
    }
}

fn check_limits(display_limit: usize, max_depth: Option<usize>) -> std::result::Result<(), String> {
    if display_limit == 0 {
        return Err("display_limit must be at least 1".to_string());
    }
    // Depth 0 would leave only the header.
    if max_depth == Some(0) {
        return Err("max_depth must be at least 1".to_string());
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            display_limit: DISPLAY_LIMIT,
            max_depth: None,
            max_content_lines: Some(MAX_CONTENT_LINES),
        }
    }
}
