//! Tests for story content parsing.

use maru_core::{Placement, SoundSource, TourStep, TourTarget};
use maru_error::ContentErrorKind;
use maru_narrative::StoryContent;
use std::io::Write;

const STORY: &str = r##"
[[chapters]]
title = "Jaipur"
description = "The pink city, painted for a prince."
accent_color = "#e07a5f"
ambient_sound_src = "audio/jaipur.mp3"

[[chapters.landmarks]]
title = "Hawa Mahal"
description = "A honeycomb of 953 windows."
icon = "🏰"

[[chapters.landmarks]]
title = "Amber Fort"
description = "Sandstone ramparts above Maota Lake."
icon = "🐘"

[[chapters]]
title = "Jodhpur"
description = "Blue houses under Mehrangarh."
accent_color = "#3d405b"
"##;

#[test]
fn test_chapters_are_indexed_in_file_order() {
    let content: StoryContent = STORY.parse().unwrap();
    let registry = content.registry();

    assert_eq!(registry.len(), 2);
    let jaipur = registry.get(0).unwrap();
    assert_eq!(jaipur.title(), "Jaipur");
    assert_eq!(
        jaipur.ambient_sound(),
        &Some(SoundSource::new("audio/jaipur.mp3"))
    );
    assert_eq!(*jaipur.landmarks()[1].index(), 1);
    assert_eq!(registry.landmark(0, 1).unwrap().title(), "Amber Fort");

    let jodhpur = registry.get(1).unwrap();
    assert_eq!(*jodhpur.index(), 1);
    assert!(jodhpur.ambient_sound().is_none());
    assert!(jodhpur.landmarks().is_empty());
}

#[test]
fn test_missing_tour_uses_shipped_steps() {
    let content: StoryContent = STORY.parse().unwrap();
    assert_eq!(content.tour_steps(), &TourStep::default_steps());
}

#[test]
fn test_custom_tour_steps() {
    let toml = format!(
        r##"{STORY}
[[tour.steps]]
title = "Welcome"
text = "A short walk through the desert."
position = "center"

[[tour.steps]]
target = "#thread-timeline"
title = "The thread"
text = "Click it."
position = "top"

[[tour.steps]]
target = "active-chapter-landmark"
title = "Landmarks"
text = "Open one."
"##
    );
    let (_, steps) = toml.parse::<StoryContent>().unwrap().into_parts();

    assert_eq!(steps.len(), 3);
    assert!(steps[0].target().is_none());
    assert_eq!(*steps[0].placement(), Placement::Center);
    assert_eq!(
        steps[1].target(),
        &Some(TourTarget::Element("thread-timeline".into()))
    );
    assert_eq!(*steps[2].placement(), Placement::Bottom);
    assert_eq!(steps[2].target(), &Some(TourTarget::ActiveChapterLandmark));
}

#[test]
fn test_empty_tour_is_rejected() {
    let toml = format!("{STORY}\n[tour]\nsteps = []\n");
    let err = toml.parse::<StoryContent>().unwrap_err();
    assert_eq!(err.kind, ContentErrorKind::EmptyTour);
}

#[test]
fn test_unknown_placement_is_rejected() {
    let toml = format!("{STORY}\n[[tour.steps]]\ntitle = \"x\"\ntext = \"y\"\nposition = \"diagonal\"\n");
    let err = toml.parse::<StoryContent>().unwrap_err();
    assert_eq!(err.kind, ContentErrorKind::UnknownPlacement("diagonal".to_string()));
}

#[test]
fn test_unknown_target_is_rejected() {
    let toml = format!("{STORY}\n[[tour.steps]]\ntarget = \"the-moon\"\ntitle = \"x\"\ntext = \"y\"\n");
    let err = toml.parse::<StoryContent>().unwrap_err();
    assert!(matches!(err.kind, ContentErrorKind::UnknownTourTarget(_)));
}

#[test]
fn test_no_chapters_is_rejected() {
    let err = "chapters = []".parse::<StoryContent>().unwrap_err();
    assert_eq!(err.kind, ContentErrorKind::NoChapters);
}

#[test]
fn test_blank_landmark_title_is_rejected() {
    let toml = r##"
[[chapters]]
title = "Udaipur"
description = "Lakes"
accent_color = "#81b29a"

[[chapters.landmarks]]
title = "  "
"##;
    let err = toml.parse::<StoryContent>().unwrap_err();
    assert_eq!(
        err.kind,
        ContentErrorKind::EmptyLandmarkTitle {
            chapter: 0,
            landmark: 0
        }
    );
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(STORY.as_bytes()).unwrap();

    let content = StoryContent::from_file(file.path()).unwrap();
    assert_eq!(content.registry().len(), 2);

    let err = StoryContent::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err.kind, ContentErrorKind::FileRead(_)));
}
