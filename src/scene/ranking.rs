//! Scene 1: mean score per genre for one release year, as a ranked bar chart.

use std::{cmp::Ordering, collections::HashMap};

use crate::{
    chart::{
        annotation::Annotation,
        axis::{AxisOrient, axis_title, band_axis, linear_axis},
        scale::{BandScale, LinearScale},
        svg::{SvgDocument, SvgElement, translate},
        tooltip::Tooltip,
    },
    config::ChartConfig,
    data::{
        filter::{RecordFilter as _, YearIs, max_of},
        record::Record,
        store::RecordStore,
    },
    scene::{
        controls::Selector,
        pipeline::{Chart, Scene},
    },
};

/// Year dropdown.
pub type YearSelector = Selector<i32>;

/// Year selected when the dataset offers it.
pub const INITIAL_YEAR: i32 = 2010;

const BAND_PADDING: f64 = 0.1;

/// Mean score of one genre within the selected year.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GenreRating {
    /// Genre label.
    pub genre: String,
    /// Mean of the finite scores; `NaN` when the genre has none.
    pub average_rating: f64,
    /// Movies of this genre in the year.
    pub count: usize,
}

/// Genres present in `year` with their mean score, best first.
///
/// Genres appear once each, grouped in first-occurrence order and then
/// stably sorted by descending mean; genres without any finite score sort last.
///
/// `average_rating` averages the finite scores only, while `count` includes
/// movies whose score is missing. A genre with no finite score gets `NaN`.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn compute_ranking(records: &[Record], year: i32) -> Vec<GenreRating> {
    struct Acc {
        sum: f64,
        scored: usize,
        count: usize,
    }

    let filter = YearIs(year);
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Acc> = HashMap::new();
    for r in records.iter().filter(|r| filter.accepts(r)) {
        let acc = groups.entry(r.genre.as_str()).or_insert_with(|| {
            order.push(r.genre.as_str());
            Acc {
                sum: 0.0,
                scored: 0,
                count: 0,
            }
        });
        acc.count += 1;
        if r.score.is_finite() {
            acc.sum += r.score;
            acc.scored += 1;
        }
    }

    let mut ranking: Vec<GenreRating> = order
        .into_iter()
        .filter_map(|genre| {
            let acc = groups.get(genre)?;
            let average_rating = if acc.scored == 0 {
                f64::NAN
            } else {
                acc.sum / acc.scored as f64
            };
            Some(GenreRating {
                genre: genre.to_string(),
                average_rating,
                count: acc.count,
            })
        })
        .collect();
    ranking.sort_by(|a, b| descending_nan_last(a.average_rating, b.average_rating));
    ranking
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Ranking for the selected year with its annotation targets.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RankingView {
    /// Selected year (`None` for a dataset without years).
    pub year: Option<i32>,
    /// Genres, best first.
    pub ranking: Vec<GenreRating>,
    /// Index of the highest finite average.
    pub highest: Option<usize>,
    /// Index of the lowest finite average.
    pub lowest: Option<usize>,
}

impl RankingView {
    fn new(year: Option<i32>, ranking: Vec<GenreRating>) -> Self {
        let finite = |g: &GenreRating| g.average_rating.is_finite();
        Self {
            year,
            highest: ranking.iter().position(finite),
            lowest: ranking.iter().rposition(finite),
            ranking,
        }
    }
}

/// Controls of the ranking scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingControls {
    /// Release year.
    pub year: YearSelector,
}

/// Genre ranking bar chart.
#[derive(Clone, Debug)]
pub struct RankingScene {
    store: RecordStore,
    years: Vec<i32>,
}

impl Scene for RankingScene {
    const NAME: &'static str = "ranking";
    type Controls = RankingControls;
    type View = RankingView;

    fn prepare(store: &RecordStore) -> Self {
        Self {
            years: store.years(),
            store: store.clone(),
        }
    }

    fn initial_controls(&self) -> RankingControls {
        RankingControls {
            year: Selector::with_preferred(self.years.clone(), &INITIAL_YEAR),
        }
    }

    fn compute(&self, controls: &RankingControls) -> RankingView {
        let year = controls.year.selected().copied();
        let ranking = year
            .map(|y| compute_ranking(self.store.records(), y))
            .unwrap_or_default();
        RankingView::new(year, ranking)
    }

    fn render(&self, view: &RankingView, config: &ChartConfig) -> Chart {
        let layout = &config.ranking;
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let origin = layout.plot_origin();

        let x = BandScale::new(
            view.ranking.iter().map(|g| g.genre.clone()).collect(),
            (0.0, w),
            BAND_PADDING,
        );
        let y = LinearScale::from_zero(
            max_of(view.ranking.iter().map(|g| g.average_rating)),
            (h, 0.0),
        );

        let mut plot = SvgElement::new("g")
            .class("plot")
            .attr("transform", translate(origin.x, origin.y));
        plot.push(
            band_axis(&x, AxisOrient::Bottom, (0.0, w))
                .class("x-axis")
                .attr("transform", translate(0.0, h)),
        );
        plot.push(linear_axis(&y, AxisOrient::Left, None).class("y-axis"));
        plot.push(axis_title(
            "Genre",
            w / 2.0,
            h + layout.margin.bottom - 10.0,
            AxisOrient::Bottom,
            "middle",
        ));
        plot.push(axis_title(
            "Average Score",
            -h / 2.0,
            -layout.margin.left + 15.0,
            AxisOrient::Left,
            "middle",
        ));

        let mut marks = Vec::new();
        let mut bars = SvgElement::new("g").class("bars");
        for g in &view.ranking {
            let (Some(bx), true) = (x.position(&g.genre), g.average_rating.is_finite()) else {
                continue;
            };
            let top = y.apply(g.average_rating);
            let tip = Tooltip::new(&g.genre)
                .line(format!("Average Score: {:.2}", g.average_rating))
                .line(format!("Movies: {}", g.count));
            bars.push(
                SvgElement::new("rect")
                    .class("bar")
                    .num("x", bx)
                    .num("y", top)
                    .num("width", x.bandwidth())
                    .num("height", h - top)
                    .attr("fill", config.palette.bar.to_hex())
                    .child(tip.to_title_element()),
            );
            marks.push(tip);
        }
        plot.push(bars);

        let annotate = |idx: Option<usize>, title: &str, dy: f64| {
            let g = view.ranking.get(idx?)?;
            let at = (x.center(&g.genre)?, y.apply(g.average_rating));
            Some(
                Annotation::new(
                    title,
                    format!("{}: {:.2}", g.genre, g.average_rating),
                    at.into(),
                )
                .offset(20.0, dy)
                .color(config.palette.annotation),
            )
        };
        let annotations: Vec<Annotation> = [
            annotate(view.highest, "Highest Average Score", -15.0),
            annotate(view.lowest, "Lowest Average Score", -45.0),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut notes = SvgElement::new("g").class("annotations");
        for a in &annotations {
            notes.push(a.to_svg());
        }
        plot.push(notes);

        let mut svg = SvgDocument::new(layout.svg_width(), layout.svg_height());
        svg.push(plot);
        Chart {
            svg,
            marks,
            annotations,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ranking.rs"]
mod tests;
