use maru_core::{AccentColor, Chapter, ElementId, Landmark, Rect, Size, SoundSource, Viewport};

fn udaipur() -> Chapter {
    Chapter::builder()
        .index(2usize)
        .title("Udaipur")
        .description("City of lakes and marble palaces")
        .accent_color("#3d7ea6")
        .ambient_sound(SoundSource::new("audio/udaipur.mp3"))
        .landmarks(vec![Landmark::new(
            2,
            0,
            "Lake Pichola",
            "An artificial freshwater lake.",
            "🌊",
        )])
        .build()
        .unwrap()
}

#[test]
fn chapter_elements_follow_index() {
    let chapter = udaipur();
    assert_eq!(chapter.element(), ElementId::chapter(2));
    assert_eq!(chapter.title_element(), ElementId::chapter_title(2));
    assert_eq!(chapter.description_element(), ElementId::chapter_description(2));
    assert_eq!(chapter.landmarks()[0].anchor(), ElementId::landmark(2, 0));
}

#[test]
fn stagger_counts_ignore_whitespace() {
    let chapter = udaipur();
    assert_eq!(chapter.title_glyphs(), 7);
    assert_eq!(chapter.description_words(), 6);
}

#[test]
fn builder_requires_accent_color() {
    let result = Chapter::builder()
        .index(0usize)
        .title("Jodhpur")
        .description("The blue city")
        .build();
    assert!(result.is_err());
}

#[test]
fn accent_color_round_trips_through_serde() {
    let color = AccentColor::new("#c2410c");
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, "\"#c2410c\"");
}

#[test]
fn viewport_centers_a_box() {
    let viewport = Viewport::new(1000.0, 800.0);
    let point = viewport.center(Size::new(200.0, 100.0));
    assert_eq!(point.left, 400.0);
    assert_eq!(point.top, 350.0);
}

#[test]
fn rect_edges() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.right(), 40.0);
    assert_eq!(rect.bottom(), 60.0);
    assert_eq!(rect.size(), Size::new(30.0, 40.0));
}
