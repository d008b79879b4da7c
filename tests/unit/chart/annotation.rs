use super::*;

#[test]
fn wrap_text_breaks_on_words() {
    assert_eq!(
        wrap_text("Movie: The  Empire   Strikes Back", 12),
        vec!["Movie: The", "Empire", "Strikes Back"]
    );
    assert_eq!(wrap_text("Supercalifragilistic", 5), vec!["Supercalifragilistic"]);
    assert!(wrap_text("   ", 10).is_empty());
}

#[test]
fn connector_starts_on_subject_circle() {
    let a = Annotation::new("t", "l", Point::new(100.0, 100.0))
        .offset(30.0, -40.0)
        .subject(5.0, 5.0);
    assert_eq!(a.note_position(), Point::new(130.0, 60.0));
    let (from, to) = a.connector().unwrap();
    // |offset| = 50, so the edge sits 10/50 of the way along.
    assert!((from.x - 106.0).abs() < 1e-9);
    assert!((from.y - 92.0).abs() < 1e-9);
    assert_eq!(to, Point::new(130.0, 60.0));
}

#[test]
fn no_connector_without_offset() {
    let a = Annotation::new("t", "l", Point::new(1.0, 1.0));
    assert!(a.connector().is_none());
    let inside = Annotation::new("t", "l", Point::new(1.0, 1.0))
        .offset(3.0, 4.0)
        .subject(10.0, 0.0);
    assert!(inside.connector().is_none());
}

#[test]
fn svg_contains_subject_connector_and_note() {
    let a = Annotation::new(
        "Best Budget to Revenue Ratio",
        "Movie: Alpha, Budget: $1.00M, Gross Revenue: $5.00M",
        Point::new(50.0, 50.0),
    )
    .offset(50.0, -30.0)
    .subject(5.0, 5.0)
    .wrap(150.0)
    .color(Rgb8::new(0, 0, 0));

    let g = a.to_svg();
    assert!(g.has_class("annotation"));
    assert_eq!(g.descendants_where(&|e| e.has_class("annotation-subject")).len(), 1);
    assert_eq!(g.descendants_where(&|e| e.has_class("annotation-connector")).len(), 1);

    let spans = g.descendants_where(&|e| e.tag() == "tspan");
    let (title, label) = a.lines();
    assert_eq!(spans.len(), title.len() + label.len());
    assert_eq!(spans[0].get_attr("font-weight"), Some("bold"));
    assert!(g.text_content().contains("Movie: Alpha,"));
}

#[test]
fn bare_annotation_has_only_a_note() {
    let g = Annotation::new("Highest", "Drama: 7.50", Point::new(0.0, 0.0)).to_svg();
    assert!(g.descendants_where(&|e| e.has_class("annotation-subject")).is_empty());
    assert!(g.descendants_where(&|e| e.has_class("annotation-connector")).is_empty());
    assert_eq!(g.descendants_where(&|e| e.tag() == "tspan").len(), 2);
}
