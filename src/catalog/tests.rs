use super::*;

#[test]
fn builtin_catalog_parses_and_validates() {
    let c = Catalog::builtin().unwrap();
    assert_eq!(c.artist.name, "Erness");
    assert_eq!(c.originals.len(), 4);
    assert_eq!(c.covers.len(), 3);
    assert_eq!(c.beats.len(), 3);
    assert_eq!(c.videos.len(), 4);
    assert_eq!(c.upcoming.len(), 3);
    assert_eq!(c.news.len(), 4);
    assert_eq!(c.platforms.len(), 5);
    assert_eq!(c.albums.len(), 3);
    assert_eq!(c.albums[0].file_base, "album-home01");
    assert_eq!(c.news[3].category, NewsCategory::Other);
    assert_eq!(c.covers[1].original_artist.as_deref(), Some("La Quinta Estación"));
}

#[test]
fn handle_ids_are_scoped_by_track_kind() {
    let c = Catalog::builtin().unwrap();
    let original = c.originals[0].handle_id(TrackKind::Original);
    let cover = c.covers[0].handle_id(TrackKind::Cover);
    assert_eq!(original.as_str(), "originals:1");
    assert_eq!(cover.as_str(), "covers:1");
    assert_ne!(original, cover);
}

#[test]
fn embed_urls_follow_each_provider() {
    assert_eq!(
        VideoSource::Youtube {
            id: "kP4-ySjTokE".into()
        }
        .embed_url(),
        "https://www.youtube.com/embed/kP4-ySjTokE"
    );
    assert_eq!(
        VideoSource::Vimeo { id: "123".into() }.embed_url(),
        "https://player.vimeo.com/video/123?title=0&byline=0&portrait=0&dnt=1"
    );
    assert_eq!(
        VideoSource::Screenpal {
            id: "cT621nnbFJ8".into()
        }
        .embed_url(),
        "https://go.screenpal.com/player/cT621nnbFJ8?width=100%&height=100%&ff=1&title=0"
    );
    assert_eq!(
        VideoSource::Embed {
            url: "https://example.com/v".into()
        }
        .embed_url(),
        "https://example.com/v"
    );
}

#[test]
fn only_youtube_videos_have_thumbnails() {
    let c = Catalog::builtin().unwrap();
    assert_eq!(
        c.videos[0].thumbnail_url().as_deref(),
        Some("https://img.youtube.com/vi/kP4-ySjTokE/hqdefault.jpg")
    );
    assert_eq!(c.upcoming[0].thumbnail_url(), None);
}

#[test]
fn byline_skips_empty_album() {
    let c = Catalog::builtin().unwrap();
    assert_eq!(c.originals[0].byline(), "Erness");
    assert_eq!(c.beats[0].byline(), "MerMusic Beats • Neon Circuit");
}

#[test]
fn duplicate_ids_are_rejected() {
    let text = r#"
[artist]
name = "A"
tagline = "t"
contact_email = "a@b.c"

[[news]]
id = 1
title = "x"
excerpt = "y"
date = "2024-01-01"
category = "tour"

[[news]]
id = 1
title = "x2"
excerpt = "y2"
date = "2024-01-02"
category = "gig"
"#;
    match Catalog::from_toml_str(text) {
        Err(CatalogError::DuplicateId { list, id }) => {
            assert_eq!(list, "news");
            assert_eq!(id, "1");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn from_path_reads_a_replacement_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[artist]
name = "Someone"
tagline = "Hello"
contact_email = "hi@example.com"

[[videos]]
id = "v"
title = "Live"
source = { provider = "vimeo", id = "42" }
"#,
    )
    .unwrap();

    let c = Catalog::from_path(&path).unwrap();
    assert_eq!(c.artist.name, "Someone");
    assert!(c.originals.is_empty());
    assert_eq!(
        c.videos[0].embed_url(),
        "https://player.vimeo.com/video/42?title=0&byline=0&portrait=0&dnt=1"
    );
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let err = Catalog::from_path(std::path::Path::new("/nonexistent/catalog.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn duplicate_album_slides_are_rejected() {
    let text = r#"
[artist]
name = "A"
tagline = "t"
contact_email = "a@b.c"

[[albums]]
id = "al1"
file_base = "album-home01"

[[albums]]
id = "al1"
file_base = "album-home02"
"#;
    match Catalog::from_toml_str(text) {
        Err(CatalogError::DuplicateId { list, id }) => {
            assert_eq!(list, "albums");
            assert_eq!(id, "al1");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}
