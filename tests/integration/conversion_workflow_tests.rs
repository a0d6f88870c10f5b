/*!
 * Integration tests for the draft to SRT workflow
 */

use anyhow::Result;
use regex::Regex;

use draftsrt::project::{DraftProject, TextMaterial};
use draftsrt::subtitle::{convert, write_srt, CollectingDiagnostics, LogDiagnostics};

use crate::common;

#[test]
fn test_convert_withWordTimedMaterial_shouldProduceWordCues() {
    let project = common::single_segment_project(
        TextMaterial::new("1", "Full content").with_words(common::hello_world_words()),
        1_000_000,
        2_000_000,
    );

    let conversion = convert(&project, None, &mut CollectingDiagnostics::new());

    assert_eq!(
        conversion.to_srt(),
        "1\n00:00:01,000 --> 00:00:01,500\nHello\n\n2\n00:00:01,500 --> 00:00:03,000\nworld\n\n"
    );
}

#[test]
fn test_convert_withPlainMaterial_shouldProduceSegmentCue() {
    let project = common::single_segment_project(TextMaterial::new("1", "Hello world"), 1_000_000, 2_000_000);

    let conversion = convert(&project, None, &mut CollectingDiagnostics::new());

    assert_eq!(conversion.to_srt(), "1\n00:00:01,000 --> 00:00:03,000\nHello world\n\n");
}

#[test]
fn test_convert_withSampleDraft_shouldMatchExpectedSrt() -> Result<()> {
    common::init_test_logger();
    let project = DraftProject::from_json_str(common::SAMPLE_DRAFT_JSON)?;
    let mut diagnostics = LogDiagnostics::new();

    let conversion = convert(&project, Some("sample.json"), &mut diagnostics);

    assert_eq!(conversion.to_srt(), common::SAMPLE_DRAFT_SRT);
    assert_eq!(diagnostics.warnings(), 1);
    assert_eq!(conversion.report.ignored_tracks, 1);
    assert_eq!(conversion.report.skipped_segments, 1);
    assert_eq!(conversion.report.cues, 3);
    Ok(())
}

#[test]
fn test_write_srt_withSampleDraft_shouldProduceWellFormedBlocks() -> Result<()> {
    let project = DraftProject::from_json_str(common::SAMPLE_DRAFT_JSON)?;
    let conversion = convert(&project, None, &mut CollectingDiagnostics::new());
    let mut sink = Vec::new();

    write_srt(&conversion.cues, &mut sink)?;
    let output = String::from_utf8(sink)?;

    let block = Regex::new(r"^(\d+)\n\d{2,}:\d{2}:\d{2},\d{3} --> \d{2,}:\d{2}:\d{2},\d{3}\n[^\n]*$").unwrap();
    let blocks: Vec<&str> = output.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), conversion.cues.len());
    for (i, text) in blocks.iter().enumerate() {
        let caps = block.captures(text).expect("block should be well formed");
        assert_eq!(caps[1].parse::<usize>()?, i + 1);
    }
    Ok(())
}

#[test]
fn test_convert_withMissingSegmentsOnly_shouldProduceEmptyOutput() -> Result<()> {
    let project = DraftProject::from_json_str(
        r#"{"tracks": [{"type": "text", "segments": [{"material_id": "a"}, {"material_id": "b"}]}]}"#,
    )?;
    let mut diagnostics = CollectingDiagnostics::new();

    let conversion = convert(&project, Some("empty.json"), &mut diagnostics);

    assert!(conversion.cues.is_empty());
    assert_eq!(conversion.to_srt(), "");
    let ids: Vec<&str> = diagnostics.missing.iter().map(|m| m.material_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    Ok(())
}
