//! Integration tests for reading text sources from a directory tree.

use std::fs;
use std::path::Path;

use mmw_sources::{DirectorySource, SourceError, TextSource, read_file};

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, content).expect("write fixture file");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_collects_nested_files_in_path_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "2015-03-11/playlist.txt", b"#metalmittwoch #8\n  1  Slayer - Hell Awaits\n");
    write(dir.path(), "2015-03-04/playlist.txt", b"#metalmittwoch #7\r\n  1  Kreator - Phobia\r\n");

    let sources = DirectorySource::new(dir.path())
        .collect()
        .expect("collect sources");

    assert_eq!(sources.len(), 2);
    assert!(sources[0].identifier.contains("2015-03-04"));
    assert!(sources[1].identifier.contains("2015-03-11"));
    assert_eq!(sources[0].lines, ["#metalmittwoch #7", "  1  Kreator - Phobia"]);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_skips_hidden_entries_and_applies_glob() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "a.txt", b"  1  A - B\n");
    write(dir.path(), "notes.md", b"  1  C - D\n");
    write(dir.path(), ".hidden.txt", b"  1  E - F\n");
    write(dir.path(), ".git/config.txt", b"  1  G - H\n");

    let sources = DirectorySource::new(dir.path())
        .with_glob("*.txt")
        .collect()
        .expect("collect sources");

    assert_eq!(sources.len(), 1);
    assert!(sources[0].identifier.ends_with("a.txt"));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_max_depth_limits_traversal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "top.txt", b"x\n");
    write(dir.path(), "nested/deep.txt", b"y\n");

    let sources = DirectorySource::new(dir.path())
        .with_max_depth(1)
        .collect()
        .expect("collect sources");

    assert_eq!(sources.len(), 1);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_invalid_utf8_is_decoded_lossily() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "latin1.txt", b"  1  Mot\xf6rhead - Ace of Spades\n");

    let source = read_file(&dir.path().join("latin1.txt")).expect("read file");
    assert_eq!(source.lines.len(), 1);
    assert!(source.lines[0].contains('\u{FFFD}'));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_error_cases() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "file.txt", b"");

    assert!(matches!(
        DirectorySource::new(dir.path().join("missing")).collect(),
        Err(SourceError::PathNotFound(_))
    ));
    assert!(matches!(
        DirectorySource::new(dir.path().join("file.txt")).collect(),
        Err(SourceError::NotADirectory(_))
    ));
    assert!(matches!(
        DirectorySource::new(dir.path()).with_glob("[").collect(),
        Err(SourceError::InvalidGlob { .. })
    ));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_sources_feed_the_extractor() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(
        dir.path(),
        "2014-06-18/log.txt",
        b"#metalmittwoch #2 (death)\n  1  Death - Pull the Plug\n  2  Obituary - Slowly We Rot\n",
    );

    let sources: Vec<TextSource> = DirectorySource::new(dir.path())
        .collect()
        .expect("collect sources");
    let dataset = mmw_core::extract(sources.into_iter().map(<(String, Vec<String>)>::from));
    let playlists = mmw_core::assemble(&dataset);

    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].title, "#metalmittwoch issue #2 on 2014-06-18");
    assert_eq!(playlists[0].tracks.len(), 2);
}
