use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::OutputError;
use crate::file_utils::FileManager;
use crate::project::DraftProject;
use crate::subtitle::{self, Conversion, LogDiagnostics};

// @module: Application controller for draft conversion

/// Outcome of converting one draft file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Draft that was converted
    pub input: PathBuf,
    /// SRT file that was written
    pub output: PathBuf,
    /// Number of cues written
    pub cues: usize,
    /// Segments dropped because their material is unknown
    pub skipped_segments: usize,
}

/// Draft path together with where it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Given explicitly on the command line
    Argument(PathBuf),
    /// Read from the configured path file
    PathFile(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Argument(path) | InputSource::PathFile(path) => path,
        }
    }
}

/// Main application controller for draft conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Use the explicit input when given, otherwise read it from the path file
    pub fn resolve_input(&self, input: Option<PathBuf>) -> Result<InputSource> {
        match input {
            Some(path) => Ok(InputSource::Argument(path)),
            None => {
                let path = FileManager::read_path_file(&self.config.path_file)?;
                debug!("Read draft path {:?} from {}", path, self.config.path_file);
                Ok(InputSource::PathFile(path))
            }
        }
    }

    /// Load a draft and assemble its cues, logging unresolved segments
    pub fn convert_file(&self, input_file: &Path) -> Result<Conversion> {
        let project = DraftProject::load(input_file)?;
        let source = input_file.display().to_string();
        let mut diagnostics = LogDiagnostics::new();

        let conversion = subtitle::convert(&project, Some(&source), &mut diagnostics);

        if diagnostics.warnings() > 0 {
            warn!(
                "{} segment(s) in '{}' referenced unknown text materials and were skipped",
                diagnostics.warnings(),
                source
            );
        }
        if conversion.cues.is_empty() {
            warn!("No subtitles found in '{}'", source);
        }

        Ok(conversion)
    }

    /// Convert one draft file.
    ///
    /// `output` overrides the generated `<prefix>-<suffix>.srt` path, which
    /// otherwise lands in the configured directory or next to the draft.
    pub fn run(&self, input_file: &Path, output: Option<&Path>) -> Result<RunSummary> {
        self.run_with_default_dir(input_file, output, &draft_dir(input_file))
    }

    /// Convert a resolved draft file.
    ///
    /// A path read from the path file generates its output in the current
    /// directory unless an output directory is configured.
    pub fn run_input(&self, input: &InputSource, output: Option<&Path>) -> Result<RunSummary> {
        match input {
            InputSource::Argument(path) => self.run(path, output),
            InputSource::PathFile(path) => self.run_with_default_dir(path, output, Path::new(".")),
        }
    }

    fn run_with_default_dir(
        &self,
        input_file: &Path,
        output: Option<&Path>,
        default_dir: &Path,
    ) -> Result<RunSummary> {
        if !input_file.is_file() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => FileManager::generate_output_path(
                self.output_dir(default_dir),
                &self.config.output.prefix,
                &FileManager::output_suffix(),
            ),
        };

        if output_path.exists() && !self.config.output.force_overwrite {
            return Err(OutputError::Exists(output_path).into());
        }

        let conversion = self.convert_file(input_file)?;
        self.write_output(&conversion, &output_path)?;

        info!(
            "Successfully converted subtitles from '{}' to {}",
            input_file.display(),
            output_path.display()
        );

        Ok(RunSummary {
            input: input_file.to_path_buf(),
            output: output_path,
            cues: conversion.report.cues,
            skipped_segments: conversion.report.skipped_segments,
        })
    }

    /// Convert every draft file found below `input_dir`.
    ///
    /// A failing draft is logged and does not stop the others.
    pub fn run_folder(&self, input_dir: &Path) -> Result<Vec<RunSummary>> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Starting conversion for directory: {:?}", input_dir);

        let drafts = FileManager::find_files_named(input_dir, &self.config.draft_file_name)?;
        if drafts.is_empty() {
            warn!("No '{}' files found in {:?}", self.config.draft_file_name, input_dir);
            return Ok(Vec::new());
        }

        let mut summaries = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            match self.run(draft, None) {
                Ok(summary) => summaries.push(summary),
                Err(e) => error!("Error processing file {:?}: {:#}", draft, e),
            }
        }

        info!("Finished processing {} of {} files", summaries.len(), drafts.len());

        Ok(summaries)
    }

    // @returns: Configured output directory, or the given default
    fn output_dir(&self, default_dir: &Path) -> PathBuf {
        match self.config.output.directory.as_deref().filter(|d| !d.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_dir.to_path_buf(),
        }
    }

    fn write_output(&self, conversion: &Conversion, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            FileManager::ensure_dir(parent)?;
        }

        let file = File::create(output_path).map_err(|source| OutputError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

        subtitle::write_srt(&conversion.cues, file).map_err(|source| OutputError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

// @returns: Directory holding the draft, "." for a bare file name
fn draft_dir(input_file: &Path) -> PathBuf {
    input_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
