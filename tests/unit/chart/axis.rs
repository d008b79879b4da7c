use super::*;

fn tick_labels(axis: &SvgElement) -> Vec<String> {
    axis.descendants_where(&|e| e.has_class("tick"))
        .into_iter()
        .map(|t| t.text_content())
        .collect()
}

#[test]
fn linear_axis_default_labels_follow_step() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    let axis = linear_axis(&scale, AxisOrient::Bottom, None);
    let labels = tick_labels(&axis);
    assert_eq!(labels.len(), 11);
    assert_eq!(labels[0], "0.0");
    assert_eq!(labels[10], "1.0");
}

#[test]
fn linear_axis_custom_format() {
    let scale = LinearScale::new((0.0, 4.0), (300.0, 0.0));
    let fmt = |v: f64| format!("{v}!");
    let axis = linear_axis(&scale, AxisOrient::Left, Some(&fmt));
    let labels = tick_labels(&axis);
    assert_eq!(labels.first().map(String::as_str), Some("0!"));
    assert_eq!(axis.get_attr("text-anchor"), Some("end"));
}

#[test]
fn band_axis_has_a_tick_per_key() {
    let scale = BandScale::new(vec!["Drama".into(), "Action".into()], (0.0, 200.0), 0.1);
    let axis = band_axis(&scale, AxisOrient::Bottom, (0.0, 200.0));
    assert_eq!(tick_labels(&axis), vec!["Drama", "Action"]);
}

#[test]
fn left_title_is_rotated() {
    let t = axis_title("Gross", -200.0, -40.0, AxisOrient::Left, "middle");
    assert_eq!(t.get_attr("transform"), Some("rotate(-90)"));
    assert_eq!(t.text_content(), "Gross");
    let b = axis_title("Budget", 10.0, 20.0, AxisOrient::Bottom, "end");
    assert_eq!(b.get_attr("transform"), None);
}
