/*!
 * Reporting of segments that cannot be turned into cues.
 *
 * A segment whose material id is not in the index is skipped, never fatal.
 * The assembler reports each one through a [`Diagnostics`] implementation
 * so callers decide whether to log, collect or ignore them.
 */

use log::warn;

/// Receiver of advisory messages produced during cue assembly
pub trait Diagnostics {
    /// A segment referenced a material id that is not in the index
    fn missing_material(&mut self, material_id: &str, source: Option<&str>);
}

/// Forwards diagnostics to the `log` facade at warn level
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    warnings: usize,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings emitted so far
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl Diagnostics for LogDiagnostics {
    fn missing_material(&mut self, material_id: &str, source: Option<&str>) {
        self.warnings += 1;
        warn!("{}", missing_material_message(material_id, source));
    }
}

/// Warning text for an unresolved material reference
pub fn missing_material_message(material_id: &str, source: Option<&str>) -> String {
    match source {
        Some(source) => format!("Text material with ID {} not found in '{}'", material_id, source),
        None => format!("Text material with ID {} not found", material_id),
    }
}

/// One unresolved material reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMaterial {
    pub material_id: String,
    pub source: Option<String>,
}

/// Keeps every diagnostic in emission order
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    pub missing: Vec<MissingMaterial>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn missing_material(&mut self, material_id: &str, source: Option<&str>) {
        self.missing.push(MissingMaterial {
            material_id: material_id.to_string(),
            source: source.map(str::to_string),
        });
    }
}

/// Discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn missing_material(&mut self, _material_id: &str, _source: Option<&str>) {}
}
