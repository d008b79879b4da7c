use super::*;

fn movie(name: &str, company: &str, budget: f64, gross: f64) -> Record {
    Record {
        name: name.to_string(),
        genre: "Action".to_string(),
        company: company.to_string(),
        year: Some(2010),
        score: 7.0,
        budget,
        gross,
        votes: Some(1_000),
    }
}

fn select(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn keeps_selected_companies_with_positive_money() {
    let records = vec![
        movie("a", "Lucasfilm", 1e8, 3e8),
        movie("b", "Lucasfilm", 0.0, 3e8),
        movie("c", "Lucasfilm", 1e8, f64::NAN),
        movie("d", "Pixar", 1e8, 9e8),
        movie("e", "Lucasfilm", 2e8, 2e8),
    ];
    let view = compute_scatter(&records, &select(&["Lucasfilm"]));
    let names: Vec<&str> = view.points.iter().map(|p| p.record.name.as_str()).collect();
    assert_eq!(names, vec!["a", "e"]);
    assert_eq!(view.best, vec![0]);
    assert_eq!(view.max_ratio, Some(3.0));
}

#[test]
fn best_includes_every_tied_point() {
    let records = vec![
        movie("a", "Lucasfilm", 1e8, 3e8),
        movie("b", "Lucasfilm", 2e7, 6e7),
        movie("c", "Lucasfilm", 1e8, 1e8),
    ];
    let view = compute_scatter(&records, &select(&["Lucasfilm"]));
    assert_eq!(view.best, vec![0, 1]);

    let chart = ScatterScene::prepare(&RecordStore::from_records(records)).render(&view, &ChartConfig::default());
    assert_eq!(chart.annotations.len(), 2);
    assert!(chart.annotations[0].label.starts_with("Movie: a, Budget: $100M"));
}

#[test]
fn empty_selection_draws_nothing() {
    let records = vec![movie("a", "Lucasfilm", 1e8, 3e8)];
    let view = compute_scatter(&records, &BTreeSet::new());
    assert!(view.points.is_empty());
    assert!(view.best.is_empty());
    assert_eq!(view.max_ratio, None);

    let scene = ScatterScene::prepare(&RecordStore::from_records(records));
    let chart = scene.render(&view, &ChartConfig::default());
    assert!(chart.marks.is_empty());
    assert!(chart.annotations.is_empty());
}

#[test]
fn initial_controls_select_lucasfilm() {
    let store = RecordStore::from_records(vec![
        movie("a", "Pixar", 1e8, 2e8),
        movie("b", "Lucasfilm", 1e8, 2e8),
    ]);
    let scene = ScatterScene::prepare(&store);
    let view = scene.compute(&scene.initial_controls());
    assert_eq!(view.points.len(), 1);
    assert_eq!(view.points[0].record.name, "b");
}

#[test]
fn render_uses_million_ticks_and_tooltips() {
    let store = RecordStore::from_records(vec![
        movie("Big One", "Lucasfilm", 2e8, 1e9),
        movie("Small One", "Lucasfilm", 5e7, 1e8),
    ]);
    let scene = ScatterScene::prepare(&store);
    let view = scene.compute(&scene.initial_controls());
    let chart = scene.render(&view, &ChartConfig::default());

    assert_eq!(chart.svg.width(), 800.0);
    assert_eq!(chart.svg.height(), 500.0);

    let points = chart.svg.root().descendants_where(&|e| e.has_class("point"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].get_attr("r"), Some("5"));
    assert_eq!(points[0].get_attr("fill"), Some("#800080"));
    // Largest budget sits at the right edge of the 510px plot.
    assert_eq!(points[0].get_attr("cx"), Some("510"));

    assert_eq!(
        chart.marks[1].lines,
        vec![
            "Production Company: Lucasfilm".to_string(),
            "Budget: $50.0M".to_string(),
            "Gross Revenue: $100M".to_string(),
        ]
    );

    let x_axis = chart.svg.root().descendants_where(&|e| e.has_class("x-axis"));
    let labels: Vec<String> = x_axis[0]
        .descendants_where(&|e| e.tag() == "text")
        .iter()
        .map(|t| t.text_content())
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("0.00"));
    assert!(labels.contains(&"200".to_string()));
}
