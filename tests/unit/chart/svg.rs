use super::*;

#[test]
fn serializes_nested_elements_deterministically() {
    let mut doc = SvgDocument::new(100.0, 50.5);
    doc.push(
        SvgElement::new("g")
            .attr("transform", translate(10.0, 20.0))
            .child(SvgElement::new("rect").class("bar").num("width", 12.25))
            .child(SvgElement::new("text").text("A & B <C>")),
    );

    let s = doc.to_svg_string();
    assert!(s.starts_with("<?xml"));
    assert!(s.contains("width=\"100\" height=\"50.5\""));
    assert!(s.contains("<g transform=\"translate(10,20)\">"));
    assert!(s.contains("<rect class=\"bar\" width=\"12.25\"/>"));
    assert!(s.contains("<text>A &amp; B &lt;C&gt;</text>"));
    assert_eq!(s, doc.clone().to_svg_string());
}

#[test]
fn attributes_replace_in_place() {
    let e = SvgElement::new("circle").attr("r", 1).attr("fill", "red").attr("r", 5);
    assert_eq!(e.get_attr("r"), Some("5"));
    assert_eq!(e.get_attr("fill"), Some("red"));
    assert_eq!(e.get_attr("missing"), None);
}

#[test]
fn class_lookup_and_descendant_search() {
    let root = SvgElement::new("g")
        .child(SvgElement::new("g").class("x-axis tick").child(SvgElement::new("circle").class("dot")))
        .child(SvgElement::new("circle").class("dot"));

    let dots = root.descendants_where(&|e| e.has_class("dot"));
    assert_eq!(dots.len(), 2);
    let ticks = root.descendants_where(&|e| e.has_class("tick"));
    assert_eq!(ticks.len(), 1);
    assert!(!root.has_class("dot"));
}

#[test]
fn fmt_num_is_compact() {
    assert_eq!(fmt_num(0.0), "0");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(3.14159), "3.142");
    assert_eq!(fmt_num(250.0), "250");
    assert_eq!(fmt_num(f64::NAN), "0");
}
