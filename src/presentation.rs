// src/presentation.rs
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use describe_dataset_engine::{DatasetNode, OutputFormat, render_json, render_text};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Render the description tree in the configured format.
///
/// # Errors
///
/// Fails if the tree cannot be serialized as JSON.
pub fn render(tree: &DatasetNode, config: &AppConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(tree, &config.engine)),
        OutputFormat::Json => {
            let mut json = render_json(tree)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the report to `path`, or to stdout when no path is given.
///
/// # Errors
///
/// Fails if the destination cannot be written.
pub fn emit(report: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, report).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("report written to {}", path.display());
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
