use std::fmt;

use super::timestamp::write_timestamp;

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Sequence number, starting at 1
    pub index: usize,

    // @field: Start time in microseconds
    pub start_micros: i64,

    // @field: End time in microseconds
    pub end_micros: i64,

    // @field: Sanitized cue text
    pub text: String,
}

impl Cue {
    pub fn new(index: usize, start_micros: i64, end_micros: i64, text: String) -> Self {
        Cue {
            index,
            start_micros,
            end_micros,
            text,
        }
    }
}

/// Renders one SRT block, including the terminating blank line
impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        write_timestamp(f, self.start_micros)?;
        f.write_str(" --> ")?;
        write_timestamp(f, self.end_micros)?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}
