/*!
 * SRT serialization of assembled cues.
 *
 * Cues are written in the order given, without reordering, filtering or
 * validation. Every block ends with a blank line, including the last one.
 */

use std::fmt::Write as _;
use std::io::{self, BufWriter, Write};

use super::cue::Cue;

/// Write `cues` as SRT to `sink`
pub fn write_srt<W: Write>(cues: &[Cue], sink: W) -> io::Result<()> {
    let mut writer = BufWriter::new(sink);
    // Scratch buffer reused for every block, cleared before each cue
    let mut block = String::with_capacity(64);

    for cue in cues {
        block.clear();
        // Writing into a String cannot fail
        let _ = write!(block, "{}", cue);
        writer.write_all(block.as_bytes())?;
    }

    writer.flush()
}

/// Render `cues` as an SRT string
pub fn to_srt_string(cues: &[Cue]) -> String {
    let mut out = String::with_capacity(cues.len() * 48);
    for cue in cues {
        let _ = write!(out, "{}", cue);
    }
    out
}
