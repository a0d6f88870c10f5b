/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use regex::Regex;
use std::path::Path;

use draftsrt::errors::ConfigError;
use draftsrt::file_utils::FileManager;

use crate::common;

#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    Ok(())
}

#[test]
fn test_read_path_file_withSurroundingWhitespace_shouldReturnTrimmedPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path_file = common::create_test_file(temp_dir.path(), "file-path.txt", "  project/draft_content.json \n")?;

    let path = FileManager::read_path_file(&path_file)?;

    assert_eq!(path, Path::new("project/draft_content.json"));
    Ok(())
}

#[test]
fn test_read_path_file_withWhitespaceOnly_shouldReturnEmptyError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path_file = common::create_test_file(temp_dir.path(), "file-path.txt", " \n\t")?;

    let result = FileManager::read_path_file(&path_file);

    assert!(matches!(result, Err(ConfigError::EmptyPathFile(_))));
    Ok(())
}

#[test]
fn test_read_path_file_withMissingFile_shouldReturnPathFileError() {
    let result = FileManager::read_path_file("no-such-file-path.txt");

    match result {
        Err(err @ ConfigError::PathFile { .. }) => {
            assert!(err.to_string().contains("contains the name of the JSON file"));
        }
        other => panic!("expected path file error, got {:?}", other),
    }
}

#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path("/tmp/output", "subtitles", "1234567890");

    assert_eq!(output_path, Path::new("/tmp/output/subtitles-1234567890.srt"));
}

#[test]
fn test_output_suffix_shouldBeAtMostTenDigits() {
    let re = Regex::new(r"^\d{1,10}$").unwrap();
    let suffix = FileManager::output_suffix();

    assert!(re.is_match(&suffix), "unexpected suffix {}", suffix);
}

#[test]
fn test_find_files_named_withNestedDrafts_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let b = common::create_test_file(temp_dir.path(), "b/draft_content.json", "{}")?;
    let a = common::create_test_file(temp_dir.path(), "a/nested/draft_content.json", "{}")?;
    common::create_test_file(temp_dir.path(), "a/draft_meta_info.json", "{}")?;
    common::create_test_file(temp_dir.path(), "c/draft_content.json.bak", "{}")?;

    let found = FileManager::find_files_named(temp_dir.path(), "draft_content.json")?;

    assert_eq!(found, vec![a, b]);
    Ok(())
}
