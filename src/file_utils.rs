use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ConfigError;

// @module: File and directory utilities

/// Extension of generated subtitle files
pub const SRT_EXTENSION: &str = "srt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Read the draft path stored in a path file.
    ///
    /// The file holds a single path; surrounding whitespace is ignored.
    pub fn read_path_file<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::PathFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyPathFile(path.to_path_buf()));
        }

        Ok(PathBuf::from(trimmed))
    }

    /// Find files with an exact file name below a directory, sorted by path
    pub fn find_files_named<P: AsRef<Path>>(dir: P, file_name: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && entry.file_name().to_string_lossy() == file_name {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    // @generates: Time-based suffix for output names
    // @returns: Current Unix time in nanoseconds modulo 10^10
    pub fn output_suffix() -> String {
        let now = Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        nanos.rem_euclid(10_000_000_000).to_string()
    }

    // @generates: Output path `<output_dir>/<prefix>-<suffix>.srt`
    pub fn generate_output_path<P: AsRef<Path>>(output_dir: P, prefix: &str, suffix: &str) -> PathBuf {
        let mut output_filename = String::with_capacity(prefix.len() + suffix.len() + 5);
        output_filename.push_str(prefix);
        output_filename.push('-');
        output_filename.push_str(suffix);
        output_filename.push('.');
        output_filename.push_str(SRT_EXTENSION);

        output_dir.as_ref().join(output_filename)
    }
}
