/*!
 * # draftsrt - Draft project to SRT subtitle converter
 *
 * A Rust library for turning video-editor draft projects (`draft_content.json`)
 * into SubRip subtitle files.
 *
 * ## Features
 *
 * - Load draft projects (text materials, tracks, segments, word timings)
 * - Word-level cues when a material carries word timings, one cue per
 *   segment otherwise
 * - Markup, bracket and HTML entity cleanup of subtitle text
 * - Non-fatal reporting of segments that reference unknown materials
 * - Single file and whole folder conversion
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `project`: Draft project data model and loader
 * - `subtitle`: Subtitle generation engine:
 *   - `subtitle::timestamp`: Microsecond to SRT timestamp conversion
 *   - `subtitle::sanitizer`: Subtitle text cleanup
 *   - `subtitle::material_index`: Text material lookup
 *   - `subtitle::assembler`: Cue assembly from tracks and segments
 *   - `subtitle::srt_writer`: SRT serialization
 *   - `subtitle::diagnostics`: Reporting of unresolvable segments
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod project;
pub mod subtitle;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, InputSource, RunSummary};
pub use errors::{AppError, ConfigError, OutputError, ProjectError};
pub use project::DraftProject;
pub use subtitle::{
    assemble, convert, format_timestamp, sanitize, write_srt, Conversion, Cue, MaterialIndex,
};
