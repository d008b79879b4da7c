use super::*;
use crate::{
    data::store::{BytesSource, FileSource},
    scene::{ranking::RankingScene, scatter::ScatterScene},
};

const CSV: &str = "\
name,genre,company,year,score,budget,gross,votes
A,Action,Lucasfilm,2010,7,100,300,10
B,Action,Lucasfilm,2010,9,100,300,10
C,Drama,Warner Bros.,2010,5,100,150,10
D,Drama,Warner Bros.,2011,8,100,200,10
";

fn source() -> BytesSource {
    BytesSource::new("inline", CSV.as_bytes())
}

#[test]
fn lifecycle_moves_through_loaded_and_rendered() {
    let mut session = SceneSession::<RankingScene>::new(ChartConfig::default());
    assert_eq!(session.state(), &SceneState::Uninitialized);
    assert!(session.redraw().is_err());

    session.load(&source()).unwrap();
    assert_eq!(session.state(), &SceneState::Loaded);
    assert!(session.chart().is_none());

    session.redraw().unwrap();
    assert_eq!(session.state(), &SceneState::Rendered);
    let view = session.view().unwrap();
    assert_eq!(view.year, Some(2010));
    assert_eq!(view.ranking[0].genre, "Action");
    assert_eq!(view.ranking[0].average_rating, 8.0);

    let chart = session.update(|c| c.year.select(&2011)).unwrap();
    assert_eq!(chart.marks.len(), 1);
    assert_eq!(session.state(), &SceneState::Rendered);
    assert_eq!(session.rebuild_count(), 2);
}

#[test]
fn failed_change_keeps_controls_and_chart() {
    let mut session = SceneSession::<RankingScene>::new(ChartConfig::default());
    session.load(&source()).unwrap();
    session.redraw().unwrap();

    let err = session.update(|c| c.year.select(&1984)).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert_eq!(session.controls().unwrap().year.selected(), Some(&2010));
    assert_eq!(session.rebuild_count(), 1);
}

#[test]
fn failed_load_is_unavailable_and_retryable() {
    let mut session = SceneSession::<ScatterScene>::new(ChartConfig::default());
    let err = session
        .load(&FileSource::new("target/no/such/movies.csv"))
        .unwrap_err();
    assert!(err.is_data_failure());
    assert!(matches!(session.state(), SceneState::Unavailable(reason) if reason.contains("movies.csv")));
    assert!(session.update(|_| Ok(())).is_err());

    session.load(&source()).unwrap();
    assert_eq!(session.state(), &SceneState::Loaded);
}

#[test]
fn every_control_change_rebuilds() {
    let mut session = SceneSession::<ScatterScene>::new(ChartConfig::default());
    session.load(&source()).unwrap();
    session.redraw().unwrap();
    assert_eq!(session.view().unwrap().best, vec![0, 1]);

    // Searching only hides options, yet still redraws.
    session.update(|c| {
        c.companies.set_search("war");
        Ok(())
    })
    .unwrap();
    assert_eq!(session.view().unwrap().points.len(), 2);

    session.update(|c| {
        c.companies.unselect_all();
        Ok(())
    })
    .unwrap();
    let view = session.view().unwrap();
    assert!(view.points.is_empty());
    assert!(session.chart().unwrap().annotations.is_empty());
    assert_eq!(session.rebuild_count(), 3);
}

#[test]
fn hover_shows_mark_tooltip_and_redraw_hides_it() {
    let mut session = SceneSession::<ScatterScene>::new(ChartConfig::default());
    session.load(&source()).unwrap();
    assert!(session.hover(0, Point::new(1.0, 1.0)).is_err());
    session.redraw().unwrap();

    session.hover(1, Point::new(100.0, 40.0)).unwrap();
    let overlay = session.tooltip();
    assert!(overlay.is_visible());
    assert_eq!(overlay.position(), Point::new(110.0, 50.0));
    assert_eq!(overlay.content().map(|t| t.heading.as_str()), Some("B"));
    assert!(session.hover(9, Point::ZERO).is_err());

    session.unhover();
    assert!(!session.tooltip().is_visible());

    session.hover(0, Point::ZERO).unwrap();
    session.redraw().unwrap();
    assert!(!session.tooltip().is_visible());
}

#[test]
fn attach_shares_one_store_between_sessions() {
    let store = RecordStore::load(&source()).unwrap();
    let mut ranking = SceneSession::<RankingScene>::new(ChartConfig::default());
    let mut scatter = SceneSession::<ScatterScene>::new(ChartConfig::default());
    ranking.attach(&store);
    scatter.attach(&store);
    assert!(ranking.redraw().unwrap().to_svg_string().contains("class=\"bar\""));
    assert!(scatter.redraw().unwrap().to_svg_string().contains("class=\"point\""));
}
