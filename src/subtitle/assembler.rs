/*!
 * Cue assembly.
 *
 * Walks the text tracks of a project in order and turns every resolvable
 * segment into cues. A segment whose material has word timings yields one
 * cue per word; otherwise it yields a single cue spanning the segment.
 * Cue numbers form one ascending sequence across all tracks.
 */

use log::debug;

use super::cue::Cue;
use super::diagnostics::Diagnostics;
use super::material_index::MaterialIndex;
use super::sanitizer::sanitize;
use super::srt_writer;
use crate::project::{Segment, TextMaterial, Track};

/// Counters describing one assembly run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Text tracks that were walked
    pub text_tracks: usize,
    /// Tracks ignored because they are not text tracks
    pub ignored_tracks: usize,
    /// Segments converted into at least one cue
    pub converted_segments: usize,
    /// Segments dropped because their material is unknown
    pub skipped_segments: usize,
    /// Cues emitted
    pub cues: usize,
}

/// Cues produced from a project together with the run's counters
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub cues: Vec<Cue>,
    pub report: AssemblyReport,
}

impl Conversion {
    /// Render the cues as SRT text
    pub fn to_srt(&self) -> String {
        srt_writer::to_srt_string(&self.cues)
    }
}

/// Builds cues from tracks against a material index
#[derive(Debug, Clone, Copy)]
pub struct CueAssembler<'a> {
    index: &'a MaterialIndex,
    source: Option<&'a str>,
}

impl<'a> CueAssembler<'a> {
    pub fn new(index: &'a MaterialIndex) -> Self {
        Self { index, source: None }
    }

    /// Name of the input (usually the draft file) quoted in diagnostics
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Assemble cues from `tracks`, reporting unresolved segments to `diagnostics`
    pub fn assemble<D: Diagnostics + ?Sized>(&self, tracks: &[Track], diagnostics: &mut D) -> Conversion {
        let mut conversion = Conversion::default();

        for track in tracks {
            if !track.is_text() {
                conversion.report.ignored_tracks += 1;
                debug!("Ignoring track of type '{}'", track.track_type);
                continue;
            }
            conversion.report.text_tracks += 1;

            for segment in &track.segments {
                let Some(material) = self.index.get(&segment.material_id) else {
                    conversion.report.skipped_segments += 1;
                    diagnostics.missing_material(&segment.material_id, self.source);
                    continue;
                };

                conversion.report.converted_segments += 1;
                push_segment_cues(&mut conversion.cues, segment, material);
            }
        }

        conversion.report.cues = conversion.cues.len();
        debug!(
            "Assembled {} cue(s) from {} text track(s), {} segment(s) skipped",
            conversion.report.cues, conversion.report.text_tracks, conversion.report.skipped_segments
        );

        conversion
    }
}

/// Emit the cues of one resolved segment, numbering from the current length
fn push_segment_cues(cues: &mut Vec<Cue>, segment: &Segment, material: &TextMaterial) {
    if material.words.is_empty() {
        let index = cues.len() + 1;
        cues.push(Cue::new(index, segment.start(), segment.end(), sanitize(&material.content)));
        return;
    }

    cues.reserve(material.words.len());
    for word in &material.words {
        let index = cues.len() + 1;
        cues.push(Cue::new(index, word.begin, word.end, sanitize(&word.text)));
    }
}

/// Assemble cues from `tracks` without a source description
pub fn assemble<D: Diagnostics + ?Sized>(
    tracks: &[Track],
    index: &MaterialIndex,
    diagnostics: &mut D,
) -> Vec<Cue> {
    CueAssembler::new(index).assemble(tracks, diagnostics).cues
}
