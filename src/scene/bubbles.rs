//! Scene 3: budget vs gross bubbles for one genre and a score window,
//! sized and colored by score.

use crate::{
    chart::{
        annotation::Annotation,
        axis::{AxisOrient, axis_title, linear_axis},
        format::{format_fixed, format_si},
        scale::{ColorScale, LinearScale},
        svg::{SvgDocument, SvgElement, translate},
        tooltip::Tooltip,
    },
    config::ChartConfig,
    data::{
        filter::{
            GenreIs, PositiveMoney, RecordFilter as _, ScoreWithin, TiePolicy, extent, max_of,
            pick_max,
        },
        record::Record,
        store::RecordStore,
    },
    scene::{
        controls::{ScoreRange, Selector},
        pipeline::{Chart, RatedRecord, Scene},
    },
};

/// Genre dropdown.
pub type GenreSelector = Selector<String>;

const RADIUS_RANGE: (f64, f64) = (2.0, 17.0);
const BEST_TIES: TiePolicy = TiePolicy::FirstFound;

/// Bubbles for the selected genre and score window.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BubbleView {
    /// Selected genre.
    pub genre: Option<String>,
    /// Lower score bound.
    pub score_min: f64,
    /// Upper score bound.
    pub score_max: f64,
    /// Score bound labels, one decimal each.
    pub labels: (String, String),
    /// Matching records with `ratio = gross / score`.
    pub bubbles: Vec<RatedRecord>,
    /// First bubble with the largest finite ratio.
    pub best: Option<usize>,
    /// Score extent of the whole positive-money pool; drives radius and color.
    pub score_extent: Option<(f64, f64)>,
}

/// Records with positive budget and gross.
pub fn money_pool(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .filter(|r| PositiveMoney.accepts(r))
        .cloned()
        .collect()
}

/// Bubbles of `genre` scored within `[score_min, score_max]`.
///
/// Only records with positive budget and gross take part, and the radius and
/// color domain comes from all of them regardless of genre or score window.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn compute_bubbles(
    records: &[Record],
    genre: &str,
    score_min: f64,
    score_max: f64,
) -> BubbleView {
    let pool = || records.iter().filter(|r| PositiveMoney.accepts(r));
    let score_extent = extent(pool().map(|r| r.score));
    let window = GenreIs(genre).and(ScoreWithin {
        min: score_min,
        max: score_max,
    });
    let bubbles: Vec<RatedRecord> = pool()
        .filter(|r| window.accepts(r))
        .map(|r| RatedRecord::new(r.clone(), r.gross / r.score))
        .collect();
    let best = pick_max(&bubbles, |b| b.ratio, BEST_TIES).first().copied();
    BubbleView {
        genre: Some(genre.to_string()),
        score_min,
        score_max,
        labels: (format_fixed(score_min, 1), format_fixed(score_max, 1)),
        bubbles,
        best,
        score_extent,
    }
}

/// Controls of the bubble scene.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleControls {
    /// Genre dropdown.
    pub genre: GenreSelector,
    /// Score window inputs.
    pub scores: ScoreRange,
}

/// Score bubble chart.
#[derive(Clone, Debug)]
pub struct BubbleScene {
    pool: Vec<Record>,
    genres: Vec<String>,
}

impl BubbleScene {
    /// Records with positive budget and gross, fixed at load.
    pub fn pool(&self) -> &[Record] {
        &self.pool
    }
}

impl Scene for BubbleScene {
    const NAME: &'static str = "bubbles";
    type Controls = BubbleControls;
    type View = BubbleView;

    fn prepare(store: &RecordStore) -> Self {
        let pool = money_pool(store.records());
        let genres = RecordStore::from_records(pool.clone()).genres();
        Self { pool, genres }
    }

    fn initial_controls(&self) -> BubbleControls {
        BubbleControls {
            genre: Selector::new(self.genres.clone()),
            scores: ScoreRange::default(),
        }
    }

    fn compute(&self, controls: &BubbleControls) -> BubbleView {
        let (min, max) = (controls.scores.min(), controls.scores.max());
        match controls.genre.selected() {
            Some(genre) => compute_bubbles(&self.pool, genre, min, max),
            None => BubbleView {
                genre: None,
                score_min: min,
                score_max: max,
                labels: controls.scores.labels(),
                bubbles: Vec::new(),
                best: None,
                score_extent: extent(self.pool.iter().map(|r| r.score)),
            },
        }
    }

    fn render(&self, view: &BubbleView, config: &ChartConfig) -> Chart {
        let layout = &config.bubbles;
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let origin = layout.plot_origin();
        let x = LinearScale::from_zero(max_of(view.bubbles.iter().map(|b| b.record.budget)), (0.0, w));
        let y = LinearScale::from_zero(max_of(view.bubbles.iter().map(|b| b.record.gross)), (h, 0.0));
        let scores = view.score_extent.unwrap_or((0.0, 0.0));
        let radius = LinearScale::new(scores, RADIUS_RANGE);
        let color = ColorScale::new(scores, config.palette.bubble_low, config.palette.bubble_high);

        let si = |v: f64| format_si(v, 3);
        let tick_format = Some(&si as &dyn Fn(f64) -> String);

        let mut plot = SvgElement::new("g")
            .class("plot")
            .attr("transform", translate(origin.x, origin.y));
        plot.push(
            linear_axis(&x, AxisOrient::Bottom, tick_format)
                .class("x-axis")
                .attr("transform", translate(0.0, h)),
        );
        plot.push(axis_title(
            "Budget",
            w / 2.0,
            h + layout.margin.bottom - 30.0,
            AxisOrient::Bottom,
            "middle",
        ));
        plot.push(linear_axis(&y, AxisOrient::Left, tick_format).class("y-axis"));
        plot.push(axis_title(
            "Gross Revenue",
            -h / 2.0,
            -layout.margin.left + 10.0,
            AxisOrient::Left,
            "middle",
        ));

        let mut marks = Vec::with_capacity(view.bubbles.len());
        let mut bubbles = SvgElement::new("g").class("bubbles");
        for b in &view.bubbles {
            let r = &b.record;
            let tip = Tooltip::new(&r.name)
                .line(format!("Genre: {}", r.genre))
                .line(format!("Budget: ${}", r.budget))
                .line(format!("Gross Revenue: ${}", r.gross))
                .line(format!("IMDb Score: {}", r.score));
            bubbles.push(
                SvgElement::new("circle")
                    .class("bubble")
                    .num("cx", x.apply(r.budget))
                    .num("cy", y.apply(r.gross))
                    .num("r", radius.apply(r.score))
                    .attr("fill", color.apply(r.score).to_hex())
                    .child(tip.to_title_element()),
            );
            marks.push(tip);
        }
        plot.push(bubbles);

        let annotations: Vec<Annotation> = view
            .best
            .and_then(|i| view.bubbles.get(i))
            .map(|b| {
                let r = &b.record;
                Annotation::new(
                    "Highest Revenue to IMDb Rating Ratio",
                    r.name.clone(),
                    (x.apply(r.budget), y.apply(r.gross)).into(),
                )
                .offset(30.0, -30.0)
                .subject(radius.apply(r.score), 0.0)
                .color(config.palette.annotation)
            })
            .into_iter()
            .collect();
        let mut notes = SvgElement::new("g").class("annotation-group");
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
#[path = "../../tests/unit/scene/bubbles.rs"]
mod tests;
