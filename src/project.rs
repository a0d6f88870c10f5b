/*!
 * Draft project data model and loader.
 *
 * Mirrors the subset of `draft_content.json` that subtitle generation needs:
 * text materials with optional word timings, and tracks of timed segments.
 * All timing fields are microseconds. Fields the converter does not use are
 * ignored while decoding.
 */

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ProjectError;
use crate::subtitle::MaterialIndex;

/// Track type whose segments become subtitles
pub const TEXT_TRACK_TYPE: &str = "text";

/// Decode an explicit `null` the same way as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root of a draft project document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftProject {
    /// Material pools
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Materials,

    /// Timeline tracks in draw order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<Track>,
}

/// Material pools of a project; only text materials are modelled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    /// Text materials
    #[serde(default, deserialize_with = "null_as_default")]
    pub texts: Vec<TextMaterial>,
}

/// A text block, optionally carrying word-level timings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMaterial {
    /// Identifier referenced by segments
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Full (possibly annotated) text
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Word timings; empty when the material was not transcribed word by word
    #[serde(default, deserialize_with = "null_as_default")]
    pub words: Vec<Word>,
}

impl TextMaterial {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            words: Vec::new(),
        }
    }

    /// Attach word timings
    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }
}

/// A single timed word inside a text material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Start in microseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub begin: i64,

    /// End in microseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: i64,

    /// Word text
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Word {
    pub fn new(begin: i64, end: i64, text: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            text: text.into(),
        }
    }
}

/// A timeline track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track kind ("text", "video", "audio", ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub track_type: String,

    /// Segments in timeline order
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
}

impl Track {
    pub fn new(track_type: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            track_type: track_type.into(),
            segments,
        }
    }

    /// Shorthand for a subtitle-bearing track
    pub fn text(segments: Vec<Segment>) -> Self {
        Self::new(TEXT_TRACK_TYPE, segments)
    }

    /// Whether this track contributes subtitles
    pub fn is_text(&self) -> bool {
        self.track_type == TEXT_TRACK_TYPE
    }
}

/// Placement of a material on the timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Referenced material identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub material_id: String,

    /// Position on the output timeline
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_timerange: Timerange,
}

impl Segment {
    pub fn new(material_id: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            material_id: material_id.into(),
            target_timerange: Timerange { start, duration },
        }
    }

    pub fn start(&self) -> i64 {
        self.target_timerange.start
    }

    pub fn duration(&self) -> i64 {
        self.target_timerange.duration
    }

    /// `start + duration`, saturating on overflow
    pub fn end(&self) -> i64 {
        self.target_timerange.start.saturating_add(self.target_timerange.duration)
    }
}

/// Start and duration in microseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timerange {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
}

impl DraftProject {
    /// Decode a project from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, ProjectError> {
        serde_json::from_str(content).map_err(ProjectError::Decode)
    }

    /// Read and decode a project file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let project: Self = serde_json::from_str(&content).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loaded draft {:?}: {} text material(s), {} track(s)",
            path,
            project.materials.texts.len(),
            project.tracks.len()
        );

        Ok(project)
    }

    /// Build the id lookup over this project's text materials
    pub fn material_index(&self) -> MaterialIndex {
        MaterialIndex::build(self.materials.texts.iter().cloned())
    }
}
