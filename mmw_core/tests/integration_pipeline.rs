//! Integration tests for the extraction pipeline.
//!
//! These tests verify the complete flow of:
//! - Extraction of records and headers from several sources
//! - Playlist assembly from the extracted dataset
//! - Band and track rankings with tie groups
//! - JSON form of assembled playlists and datasets

use mmw_core::{
    Dataset, Direction, Extractor, LineClassifier, Playlist, PlaylistTemplate, RankField,
    RankedEntry, assemble, assemble_with, extract, rank, render_band_report,
};

fn entry(value: &str, count: usize) -> RankedEntry {
    RankedEntry {
        value: value.to_string(),
        count,
    }
}

#[test]
fn test_extract_then_assemble_round_trip() {
    let dataset = extract([(
        "metalmittwoch/doom.txt",
        [
            "  1  Black Sabbath - Paranoid",
            "  2  Iommi - Orchid",
            "#metalmittwoch #7 (doom)",
        ],
    )]);

    let playlists = assemble(&dataset);
    assert_eq!(playlists.len(), 1);

    let playlist = &playlists[0];
    assert!(playlist.title.contains("#7"));
    assert_eq!(playlist.description.as_deref(), Some("Special topic: doom"));

    let tracks: Vec<&str> = playlist.tracks.iter().map(|t| t.track.as_str()).collect();
    let bands: Vec<Option<&str>> = playlist.tracks.iter().map(|t| t.band.as_deref()).collect();
    assert_eq!(tracks, ["paranoid", "orchid"]);
    assert_eq!(bands, [Some("black sabbath"), Some("iommi")]);
}

#[test]
fn test_dated_identifier_goes_into_title() {
    let dataset = extract([(
        "archive/2016-11-23/notes.txt",
        ["#metalmittwoch #101", "  1  Bolt Thrower - The IVth Crusade"],
    )]);

    let playlists = assemble(&dataset);
    assert_eq!(playlists[0].title, "#metalmittwoch issue #101 on 2016-11-23");
    assert_eq!(playlists[0].description, None);
}

#[test]
fn test_band_counted_across_sources() {
    let dataset = extract([
        ("1", vec!["  1  Slayer - Angel of Death", "  2  Anthrax - Indians"]),
        ("2", vec!["  1  Slayer - Raining Blood", "  2  Anthrax - Caught in a Mosh"]),
        ("3", vec!["  1  Slayer - South of Heaven"]),
    ]);

    let top = rank(&dataset, RankField::Band, 1, Direction::Most)
        .unwrap_or_else(|e| panic!("rank failed: {e}"));
    assert_eq!(top, vec![entry("slayer", 3)]);
}

#[test]
fn test_tied_bands_are_both_returned() {
    let dataset = extract([
        ("1", vec!["  1  Kreator - Flag of Hate", "  2  Sodom - Agent Orange"]),
        ("2", vec!["  1  Kreator - Phobia", "  2  Sodom - Remember the Fallen"]),
        ("3", vec!["  1  Destruction - Curse the Gods"]),
    ]);

    let top = rank(&dataset, RankField::Band, 1, Direction::Most)
        .unwrap_or_else(|e| panic!("rank failed: {e}"));
    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|e| e.count == 2));
    assert!(top.contains(&entry("kreator", 2)));
    assert!(top.contains(&entry("sodom", 2)));
}

#[test]
fn test_annotations_do_not_split_groups() {
    let dataset = extract([
        ("1", vec!["  1  Iron Maiden (live) - Aces High"]),
        ("2", vec!["  1  'Iron Maiden' - Aces High [remastered]"]),
        ("3", vec!["  1  IRON MAIDEN | encore - Aces High"]),
    ]);

    let bands = rank(&dataset, RankField::Band, 3, Direction::Most)
        .unwrap_or_else(|e| panic!("rank failed: {e}"));
    assert_eq!(bands, vec![entry("iron maiden", 3)]);

    let tracks = rank(&dataset, RankField::Track, 3, Direction::Most)
        .unwrap_or_else(|e| panic!("rank failed: {e}"));
    assert_eq!(tracks, vec![entry("aces high", 3)]);

    assert_eq!(
        render_band_report(&bands, "Top Bands"),
        "Top Bands\n---------\n#01: Iron Maiden (3 times)\n"
    );
}

#[test]
fn test_custom_marker_pipeline() {
    let classifier = LineClassifier::new("#doomsday")
        .unwrap_or_else(|e| panic!("classifier should build: {e}"));
    let extractor = Extractor::new(classifier);

    let dataset = extractor.extract([
        ("a", vec!["#doomsday #2", "  1  Candlemass - Solitude"]),
        ("b", vec!["#metalmittwoch #1", "  1  Pentagram - Forever My Queen"]),
    ]);

    let template = PlaylistTemplate {
        event_name: "#doomsday".to_string(),
        ..PlaylistTemplate::default()
    };
    let playlists = assemble_with(&dataset, &template);
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].title, "#doomsday issue #2");
}

#[test]
fn test_unreadable_lines_do_not_abort_extraction() {
    let dataset = extract([(
        "mixed",
        [
            "#metalmittwoch #3",
            "  1  Emperor - I Am the Black Wizards",
            "  77777777777  Broken - Order",
            "  2  Empty - \"\"",
            "random chatter",
            "  3  Darkthrone - Transilvanian Hunger",
        ],
    )]);

    assert_eq!(dataset.unreadable_count, 2);
    assert_eq!(dataset.record_count(), 2);
    assert_eq!(assemble(&dataset)[0].tracks.len(), 2);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_playlists_and_dataset_round_trip_through_json() {
    let dataset = extract([(
        "2015-03-04/log",
        [
            "#metalmittwoch #7 (doom)",
            "  1  Black Sabbath - Paranoid",
            "  2  Orchid",
            "  9999999999999  Broken - Order",
        ],
    )]);
    let playlists = assemble(&dataset);

    let json = serde_json::to_value(&playlists).expect("serialize playlists");
    assert_eq!(json[0]["issue"], "#7");
    assert_eq!(json[0]["date"], "2015-03-04");
    assert_eq!(json[0]["tracks"][1]["band"], serde_json::Value::Null);

    let decoded: Vec<Playlist> = serde_json::from_value(json).expect("deserialize playlists");
    assert_eq!(decoded, playlists);

    let text = serde_json::to_string(&dataset).expect("serialize dataset");
    let decoded: Dataset = serde_json::from_str(&text).expect("deserialize dataset");
    assert_eq!(decoded, dataset);
    assert_eq!(decoded.unreadable_count, 1);
}
