//! Scene 2: budget vs gross revenue for the selected production companies.

use std::collections::BTreeSet;

use crate::{
    chart::{
        annotation::Annotation,
        axis::{AxisOrient, axis_title, linear_axis},
        format::format_si,
        scale::LinearScale,
        svg::{SvgDocument, SvgElement, translate},
        tooltip::Tooltip,
    },
    config::ChartConfig,
    data::{
        filter::{CompanyIn, PositiveMoney, RecordFilter as _, TiePolicy, max_of, pick_max},
        record::Record,
        store::RecordStore,
    },
    scene::{
        controls::CompanyFilter,
        pipeline::{Chart, RatedRecord, Scene},
    },
};

const POINT_RADIUS: f64 = 5.0;
const BEST_TIES: TiePolicy = TiePolicy::AllTied;

/// Filtered points and every point tied for the best gross/budget ratio.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScatterView {
    /// Selected companies.
    pub companies: BTreeSet<String>,
    /// Matching records in dataset order with `ratio = gross / budget`.
    pub points: Vec<RatedRecord>,
    /// Indices into `points` of all maximal-ratio points.
    pub best: Vec<usize>,
    /// The maximal ratio, if any point matched.
    pub max_ratio: Option<f64>,
}

/// Records of the `selected` companies with positive budget and gross.
#[tracing::instrument(skip(records, selected), fields(records = records.len(), companies = selected.len()))]
pub fn compute_scatter(records: &[Record], selected: &BTreeSet<String>) -> ScatterView {
    let filter = CompanyIn(selected).and(PositiveMoney);
    let points: Vec<RatedRecord> = records
        .iter()
        .filter(|r| filter.accepts(r))
        .map(|r| RatedRecord::new(r.clone(), r.gross / r.budget))
        .collect();
    let best = pick_max(&points, |p| p.ratio, BEST_TIES);
    let max_ratio = best.first().map(|&i| points[i].ratio);
    ScatterView {
        companies: selected.clone(),
        points,
        best,
        max_ratio,
    }
}

/// Controls of the scatter scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterControls {
    /// Searchable company multi-select.
    pub companies: CompanyFilter,
}

/// Budget/gross scatter plot.
#[derive(Clone, Debug)]
pub struct ScatterScene {
    store: RecordStore,
    companies: Vec<String>,
}

impl Scene for ScatterScene {
    const NAME: &'static str = "scatter";
    type Controls = ScatterControls;
    type View = ScatterView;

    fn prepare(store: &RecordStore) -> Self {
        Self {
            companies: store.companies(),
            store: store.clone(),
        }
    }

    fn initial_controls(&self) -> ScatterControls {
        ScatterControls {
            companies: CompanyFilter::new(self.companies.clone()),
        }
    }

    fn compute(&self, controls: &ScatterControls) -> ScatterView {
        compute_scatter(self.store.records(), &controls.companies.selection())
    }

    fn render(&self, view: &ScatterView, config: &ChartConfig) -> Chart {
        let layout = &config.scatter;
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let origin = layout.plot_origin();
        let x = LinearScale::from_zero(max_of(view.points.iter().map(|p| p.record.budget)), (0.0, w));
        let y = LinearScale::from_zero(max_of(view.points.iter().map(|p| p.record.gross)), (h, 0.0));

        let millions = |v: f64| format_si(v / 1e6, 3);
        let tick_format = Some(&millions as &dyn Fn(f64) -> String);

        let mut plot = SvgElement::new("g")
            .class("plot")
            .attr("transform", translate(origin.x, origin.y));
        plot.push(
            linear_axis(&x, AxisOrient::Bottom, tick_format)
                .class("x-axis")
                .attr("transform", translate(0.0, h)),
        );
        plot.push(linear_axis(&y, AxisOrient::Left, tick_format).class("y-axis"));
        plot.push(axis_title(
            "Budget (in millions)",
            w / 2.0,
            h + layout.margin.bottom - 10.0,
            AxisOrient::Bottom,
            "middle",
        ));
        plot.push(axis_title(
            "Gross Revenue (in millions)",
            -h / 2.0,
            -layout.margin.left + 15.0,
            AxisOrient::Left,
            "middle",
        ));

        let mut marks = Vec::with_capacity(view.points.len());
        let mut points = SvgElement::new("g").class("points");
        for p in &view.points {
            let r = &p.record;
            let tip = Tooltip::new(&r.name)
                .line(format!("Production Company: {}", r.company))
                .line(format!("Budget: ${}", format_si(r.budget, 3)))
                .line(format!("Gross Revenue: ${}", format_si(r.gross, 3)));
            points.push(
                SvgElement::new("circle")
                    .class("point")
                    .num("cx", x.apply(r.budget))
                    .num("cy", y.apply(r.gross))
                    .num("r", POINT_RADIUS)
                    .attr("fill", config.palette.point.to_hex())
                    .child(tip.to_title_element()),
            );
            marks.push(tip);
        }
        plot.push(points);

        let annotations: Vec<Annotation> = view
            .best
            .iter()
            .filter_map(|&i| view.points.get(i))
            .map(|p| {
                let r = &p.record;
                Annotation::new(
                    "Best Budget to Revenue Ratio",
                    format!(
                        "Movie: {}, Budget: ${}, Gross Revenue: ${}",
                        r.name,
                        format_si(r.budget, 3),
                        format_si(r.gross, 3)
                    ),
                    (x.apply(r.budget), y.apply(r.gross)).into(),
                )
                .offset(50.0, -30.0)
                .subject(POINT_RADIUS, 5.0)
                .wrap(150.0)
                .color(config.palette.annotation)
            })
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
#[path = "../../tests/unit/scene/scatter.rs"]
mod tests;
