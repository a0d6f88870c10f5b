/*!
 * Tests for SRT serialization
 */

use anyhow::Result;
use std::fmt::Write;

use draftsrt::subtitle::{to_srt_string, write_srt};
use draftsrt::Cue;

#[test]
fn test_cue_display_withValidCue_shouldRenderOneBlock() {
    let cue = Cue::new(7, 61_234_000, 65_432_000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", cue).unwrap();

    assert_eq!(output, "7\n00:01:01,234 --> 00:01:05,432\nTest subtitle\n\n");
}

#[test]
fn test_to_srt_string_withNoCues_shouldReturnEmpty() {
    assert_eq!(to_srt_string(&[]), "");
}

#[test]
fn test_write_srt_withTwoCues_shouldTerminateEveryBlock() -> Result<()> {
    let cues = vec![
        Cue::new(1, 1_000_000, 1_500_000, "Hello".to_string()),
        Cue::new(2, 1_500_000, 3_000_000, "world".to_string()),
    ];
    let mut sink = Vec::new();

    write_srt(&cues, &mut sink)?;

    assert_eq!(
        String::from_utf8(sink)?,
        "1\n00:00:01,000 --> 00:00:01,500\nHello\n\n2\n00:00:01,500 --> 00:00:03,000\nworld\n\n"
    );
    Ok(())
}

#[test]
fn test_write_srt_withUnorderedCues_shouldNotReorderOrValidate() -> Result<()> {
    let cues = vec![
        Cue::new(5, 9_000_000, 1_000_000, String::new()),
        Cue::new(1, 0, 0, "first".to_string()),
    ];
    let mut sink = Vec::new();

    write_srt(&cues, &mut sink)?;

    assert_eq!(
        String::from_utf8(sink)?,
        "5\n00:00:09,000 --> 00:00:01,000\n\n\n1\n00:00:00,000 --> 00:00:00,000\nfirst\n\n"
    );
    Ok(())
}
