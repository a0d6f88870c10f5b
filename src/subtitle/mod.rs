/*!
 * Subtitle generation engine.
 *
 * Turns a loaded draft project into numbered SRT cues. It is split into
 * several submodules:
 *
 * - `timestamp`: Microsecond offsets to `HH:MM:SS,mmm`
 * - `sanitizer`: Markup, bracket and entity cleanup
 * - `material_index`: Text material lookup by id
 * - `assembler`: Track/segment walk producing cues
 * - `cue`: Cue type and its SRT block rendering
 * - `srt_writer`: Serialization of cue sequences
 * - `diagnostics`: Reporting of unresolved segments
 */

// Re-export main types for easier usage
pub use self::assembler::{assemble, AssemblyReport, Conversion, CueAssembler};
pub use self::cue::Cue;
pub use self::diagnostics::{
    missing_material_message, CollectingDiagnostics, Diagnostics, LogDiagnostics, MissingMaterial, NoDiagnostics,
};
pub use self::material_index::MaterialIndex;
pub use self::sanitizer::{sanitize, sanitize_into};
pub use self::srt_writer::{to_srt_string, write_srt};
pub use self::timestamp::{format_timestamp, write_timestamp};

// Submodules
pub mod assembler;
pub mod cue;
pub mod diagnostics;
pub mod material_index;
pub mod sanitizer;
pub mod srt_writer;
pub mod timestamp;

use crate::project::DraftProject;

/// Convert a whole project: build the index once, then assemble.
///
/// `source` names the input in diagnostics, typically the draft file name.
pub fn convert<D: Diagnostics + ?Sized>(
    project: &DraftProject,
    source: Option<&str>,
    diagnostics: &mut D,
) -> Conversion {
    let index = project.material_index();
    let assembler = CueAssembler::new(&index);
    let assembler = match source {
        Some(source) => assembler.with_source(source),
        None => assembler,
    };
    assembler.assemble(&project.tracks, diagnostics)
}
