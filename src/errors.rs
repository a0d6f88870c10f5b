/*!
 * Error types for the draftsrt application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Nothing inside the subtitle engine itself fails: unresolvable segments are
 * reported through diagnostics. These errors cover the surrounding glue
 * (loading drafts, locating inputs, writing output).
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a draft project
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The draft file could not be read
    #[error("Failed to read draft file {path:?}: {source}")]
    Read {
        /// Path of the draft file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The draft file is not a well-formed project document
    #[error("Failed to parse draft JSON {path:?}: {source}")]
    Parse {
        /// Path of the draft file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory document is not a well-formed project
    #[error("Failed to parse draft JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors that can occur when writing subtitle output
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output file exists and overwriting was not requested
    #[error("Output file already exists: {0:?}. Use -f to force overwrite.")]
    Exists(PathBuf),

    /// Writing the SRT content failed
    #[error("Failed to write SRT file {path:?}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration and input discovery
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The path file could not be read
    #[error("Error reading configuration file {path:?}: {message}. Please ensure it exists and contains the name of the JSON file to process.")]
    PathFile {
        /// Path of the path file
        path: PathBuf,
        /// Read failure description
        message: String,
    },

    /// The path file holds nothing but whitespace
    #[error("Error: {0:?} is empty or contains only whitespace. Please ensure it contains the name of the JSON file to process.")]
    EmptyPathFile(PathBuf),

    /// A configuration value is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from loading a project
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// Error from writing output
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
