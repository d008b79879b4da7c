//! reelcharts renders three chart scenes over a movie dataset CSV.
//!
//! - **ranking**: mean score per genre for a release year, as a bar chart with
//!   the highest and lowest genres called out.
//! - **scatter**: budget vs gross revenue for selected production companies,
//!   calling out every movie tied for the best gross/budget ratio.
//! - **bubbles**: budget vs gross for one genre and a score window, sized and
//!   colored by score, calling out the best gross/score ratio.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a [`DataSource`] yields CSV bytes, parsed into an immutable [`RecordStore`]
//!    with numeric fields coerced (bad reals become `NaN`, bad integers `None`).
//! 2. **Compute**: a [`Scene`] filters and aggregates the records for its controls into a view.
//! 3. **Render**: the view is drawn into an [`SvgDocument`] with axes, marks,
//!    tooltips and [`Annotation`] callouts.
//! 4. **Output** (optional): [`write_chart`] stores the chart as SVG or rasterizes it to PNG.
//!
//! A [`SceneSession`] owns a scene's controls and lifecycle and rebuilds the
//! whole chart after every control change.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod config;
mod data;
mod foundation;
mod render;
mod scene;

pub use chart::annotation::{Annotation, wrap_text};
pub use chart::axis::{AxisOrient, DEFAULT_TICK_COUNT, axis_title, band_axis, linear_axis};
pub use chart::format::{format_fixed, format_si, precision_for_step};
pub use chart::scale::{BandScale, ColorScale, LinearScale, tick_step, ticks};
pub use chart::svg::{SvgDocument, SvgElement, SvgNode, fmt_num, translate};
pub use chart::tooltip::{Tooltip, TooltipOverlay};
pub use config::{ChartConfig, Palette, RasterSettings, SceneLayout};
pub use data::filter::{
    Both, CompanyIn, GenreIs, PositiveMoney, RecordFilter, ScoreWithin, TiePolicy, YearIs,
    distinct_in_order, extent, max_of, pick_max,
};
pub use data::record::{REQUIRED_COLUMNS, Record, coerce_integer, coerce_real, parse_records};
pub use data::store::{BytesSource, DataSource, FileSource, RecordStore, SharedRecords};
pub use foundation::core::{Margin, Point, Rgb8, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use render::raster::{OutputFormat, RasterImage, parse_svg, rasterize, write_chart};
pub use scene::bubbles::{
    BubbleControls, BubbleScene, BubbleView, GenreSelector, compute_bubbles, money_pool,
};
pub use scene::controls::{CompanyFilter, CompanyOption, ScoreRange, Selector};
pub use scene::pipeline::{Chart, RatedRecord, Scene, SceneSession, SceneState};
pub use scene::ranking::{
    GenreRating, INITIAL_YEAR, RankingControls, RankingScene, RankingView, YearSelector,
    compute_ranking,
};
pub use scene::scatter::{ScatterControls, ScatterScene, ScatterView, compute_scatter};
