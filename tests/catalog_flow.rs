//! End-to-end catalog flow: validate a submitted version, number it, and
//! render it the way the version page does.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordsheet::catalog::{average_rating, next_version_number, validate_content, Rating, SongVersion};
use chordsheet::constants::limits::MAX_CONTENT_LENGTH;
use chordsheet::lyrics::layout_lines;
use chordsheet::types::{SongId, UserId, VersionId};

#[test]
fn save_and_view_a_version() {
    let author = UserId::new(1);
    let submitted = "[D]Be thou my [G]vision\nO [A]Lord of my heart";
    let content = validate_content(submitted, MAX_CONTENT_LENGTH).unwrap();

    let version = SongVersion {
        id: VersionId::new(31),
        song_id: SongId::new(4),
        version_number: next_version_number([1_u32, 2]),
        creator_id: author,
        content: content.to_string(),
    };
    assert_eq!(version.version_number, 3);
    assert!(version.is_editable_by(author));
    assert!(!version.is_editable_by(UserId::new(2)));

    let lines = layout_lines(&version.parsed());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chords.as_deref(), Some("D          G"));
    assert_eq!(lines[0].lyrics, "Be thou my vision");
    assert_eq!(lines[1].chords.as_deref(), Some("  A"));
    assert_eq!(lines[1].lyrics, "O Lord of my heart");

    let ratings: Vec<Rating> = [5, 4].into_iter().map(|r| Rating::new(r).unwrap()).collect();
    let avg = average_rating(&ratings).unwrap();
    assert!((avg - 4.5).abs() < f64::EPSILON);
}

#[test]
fn version_json_uses_plain_ids() {
    let version = SongVersion {
        id: VersionId::new(1),
        song_id: SongId::new(2),
        version_number: 1,
        creator_id: UserId::new(3),
        content: "[C]la".to_string(),
    };
    let json = serde_json::to_value(&version).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["song_id"], 2);
    assert_eq!(json["creator_id"], 3);
}
