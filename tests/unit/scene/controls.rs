use super::*;

fn companies() -> Vec<String> {
    ["Warner Bros.", "Lucasfilm", "Universal Pictures", "Walt Disney"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn selector_prefers_requested_value() {
    let s = Selector::with_preferred(vec![2008, 2010, 2012], &2010);
    assert_eq!(s.selected(), Some(&2010));

    let s = Selector::with_preferred(vec![1999, 2001], &2010);
    assert_eq!(s.selected(), Some(&1999));

    let s: Selector<i32> = Selector::new(Vec::new());
    assert_eq!(s.selected(), None);
}

#[test]
fn selector_rejects_unknown_options() {
    let mut s = Selector::new(vec!["Drama".to_string(), "Action".to_string()]);
    s.select(&"Action".to_string()).unwrap();
    assert_eq!(s.selected().map(String::as_str), Some("Action"));
    assert!(s.select(&"Western".to_string()).is_err());
    assert_eq!(s.selected().map(String::as_str), Some("Action"));
}

#[test]
fn company_filter_preselects_default() {
    let f = CompanyFilter::new(companies());
    assert_eq!(f.selection().into_iter().collect::<Vec<_>>(), vec!["Lucasfilm"]);
}

#[test]
fn search_hides_without_touching_selection() {
    let mut f = CompanyFilter::new(companies());
    f.select("Walt Disney").unwrap();

    f.set_search("WAR");
    assert_eq!(f.visible().collect::<Vec<_>>(), vec!["Warner Bros."]);
    assert_eq!(f.selection().len(), 2);

    f.set_search("");
    assert_eq!(f.visible().count(), 4);
}

#[test]
fn unselect_all_clears_hidden_entries_too() {
    let mut f = CompanyFilter::new(companies());
    f.toggle("Universal Pictures").unwrap();
    f.set_search("xyz");
    f.unselect_all();
    assert!(f.selection().is_empty());
    assert!(f.toggle("Nope").is_err());
    f.toggle("Lucasfilm").unwrap();
    f.deselect("Lucasfilm").unwrap();
    assert!(f.selection().is_empty());
}

#[test]
fn score_range_clamps_and_labels() {
    let mut r = ScoreRange::default();
    assert_eq!(r.labels(), ("0.0".to_string(), "10.0".to_string()));

    r.set_min(7.25).unwrap();
    r.set_max(42.0).unwrap();
    assert_eq!(r.min(), 7.25);
    assert_eq!(r.max(), 10.0);
    assert_eq!(r.labels().0, "7.2");

    assert!(r.set_min(f64::NAN).is_err());
    let inverted = ScoreRange::new(8.0, 3.0).unwrap();
    assert!(inverted.min() > inverted.max());
}
