use super::*;

fn movie(name: &str, genre: &str, score: f64, budget: f64, gross: f64) -> Record {
    Record {
        name: name.to_string(),
        genre: genre.to_string(),
        company: "Studio".to_string(),
        year: Some(2011),
        score,
        budget,
        gross,
        votes: None,
    }
}

fn sample() -> Vec<Record> {
    vec![
        movie("low", "Drama", 2.0, 1e7, 2e7),
        movie("broke", "Horror", 9.5, 0.0, 5e7),
        movie("mid", "Action", 6.0, 5e7, 1.2e8),
        movie("high", "Action", 8.0, 1e8, 1.6e8),
        movie("top", "Drama", 9.0, 3e7, 1.8e8),
    ]
}

#[test]
fn score_extent_ignores_genre_and_window() {
    let records = sample();
    let a = compute_bubbles(&records, "Action", 0.0, 10.0);
    let b = compute_bubbles(&records, "Drama", 8.5, 10.0);
    let c = compute_bubbles(&records, "Western", 3.0, 4.0);
    // The unfunded 9.5 is excluded from the pool.
    assert_eq!(a.score_extent, Some((2.0, 9.0)));
    assert_eq!(b.score_extent, a.score_extent);
    assert_eq!(c.score_extent, a.score_extent);
    assert!(c.bubbles.is_empty());
    assert_eq!(c.best, None);
}

#[test]
fn window_is_inclusive_and_inverted_window_is_empty() {
    let records = sample();
    let v = compute_bubbles(&records, "Action", 6.0, 8.0);
    assert_eq!(v.bubbles.len(), 2);
    assert_eq!(v.labels, ("6.0".to_string(), "8.0".to_string()));

    let v = compute_bubbles(&records, "Action", 8.0, 6.0);
    assert!(v.bubbles.is_empty());
}

#[test]
fn best_is_first_found_on_ties() {
    let records = vec![
        movie("first", "Action", 5.0, 1e7, 1e8),
        movie("second", "Action", 10.0, 1e7, 2e8),
        movie("lower", "Action", 4.0, 1e7, 2e7),
    ];
    let v = compute_bubbles(&records, "Action", 0.0, 10.0);
    assert_eq!(v.bubbles[0].ratio, v.bubbles[1].ratio);
    assert_eq!(v.best, Some(0));
}

#[test]
fn zero_score_never_wins() {
    let records = vec![
        movie("zero", "Action", 0.0, 1e7, 1e8),
        movie("one", "Action", 1.0, 1e7, 1e7),
    ];
    let v = compute_bubbles(&records, "Action", 0.0, 10.0);
    assert_eq!(v.bubbles.len(), 2);
    assert_eq!(v.best, Some(1));
}

#[test]
fn scene_genres_come_from_funded_records() {
    let scene = BubbleScene::prepare(&RecordStore::from_records(sample()));
    let controls = scene.initial_controls();
    assert_eq!(controls.genre.options(), &["Drama", "Action"]);
    assert_eq!(controls.genre.selected().map(String::as_str), Some("Drama"));
    assert_eq!(controls.scores, ScoreRange::default());
    assert_eq!(scene.pool().len(), 4);
}

#[test]
fn render_sizes_and_colors_by_score() {
    let scene = BubbleScene::prepare(&RecordStore::from_records(sample()));
    let view = scene.compute(&scene.initial_controls());
    let chart = scene.render(&view, &ChartConfig::default());

    assert_eq!(chart.svg.width(), 700.0);
    assert_eq!(chart.svg.height(), 500.0);

    let bubbles = chart.svg.root().descendants_where(&|e| e.has_class("bubble"));
    assert_eq!(bubbles.len(), 2);
    // "low" holds the pool minimum, "top" the maximum.
    assert_eq!(bubbles[0].get_attr("r"), Some("2"));
    assert_eq!(bubbles[0].get_attr("fill"), Some("#f6ecf9"));
    assert_eq!(bubbles[1].get_attr("r"), Some("17"));
    assert_eq!(bubbles[1].get_attr("fill"), Some("#920085"));

    assert_eq!(chart.marks[1].heading, "top");
    assert_eq!(
        chart.marks[1].lines,
        vec![
            "Genre: Drama".to_string(),
            "Budget: $30000000".to_string(),
            "Gross Revenue: $180000000".to_string(),
            "IMDb Score: 9".to_string(),
        ]
    );

    assert_eq!(chart.annotations.len(), 1);
    let a = &chart.annotations[0];
    assert_eq!(a.title, "Highest Revenue to IMDb Rating Ratio");
    assert_eq!(a.label, "top");
    assert_eq!(a.subject_radius, 17.0);
}
