//! Shared filter → aggregate → scale → render pipeline and the session that
//! drives it.
//!
//! A [`Scene`] is pure: it turns controls into a view and a view into a
//! [`Chart`]. A [`SceneSession`] owns everything mutable (lifecycle state,
//! controls, the last chart and the tooltip overlay) and rebuilds the whole
//! chart after every control change.

use crate::{
    chart::{
        annotation::Annotation,
        svg::SvgDocument,
        tooltip::{Tooltip, TooltipOverlay},
    },
    config::ChartConfig,
    data::{
        record::Record,
        store::{DataSource, RecordStore},
    },
    foundation::{
        core::Point,
        error::{ReelError, ReelResult},
    },
};

/// A record paired with the derived ratio a scene ranks it by.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RatedRecord {
    /// Source row.
    #[serde(flatten)]
    pub record: Record,
    /// Scene-specific ratio (`gross / budget` or `gross / score`).
    pub ratio: f64,
}

impl RatedRecord {
    /// Pair `record` with `ratio`.
    pub fn new(record: Record, ratio: f64) -> Self {
        Self { record, ratio }
    }
}

/// Rendered output of one scene build.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Complete SVG document.
    pub svg: SvgDocument,
    /// Hover content per drawn mark, in drawing order.
    pub marks: Vec<Tooltip>,
    /// Callouts placed on the plot.
    pub annotations: Vec<Annotation>,
}

impl Chart {
    /// Serialized SVG text.
    pub fn to_svg_string(&self) -> String {
        self.svg.to_svg_string()
    }
}

/// One chart scene: how controls become a view and a view becomes a chart.
pub trait Scene: Sized {
    /// Short scene name used in logs and file names.
    const NAME: &'static str;

    /// Control state driving [`Scene::compute`].
    type Controls: Clone + std::fmt::Debug;

    /// Filtered/aggregated data shown by the chart.
    type View: serde::Serialize + std::fmt::Debug;

    /// Per-load preparation (option lists, pre-filtered pools).
    fn prepare(store: &RecordStore) -> Self;

    /// Controls as first presented after a load.
    fn initial_controls(&self) -> Self::Controls;

    /// Recompute the view from scratch for `controls`.
    fn compute(&self, controls: &Self::Controls) -> Self::View;

    /// Draw `view` as a fresh chart.
    fn render(&self, view: &Self::View, config: &ChartConfig) -> Chart;
}

/// Lifecycle of a [`SceneSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneState {
    /// Nothing loaded yet.
    Uninitialized,
    /// Dataset available, no chart built yet.
    Loaded,
    /// A chart reflects the current controls.
    Rendered,
    /// The last load failed; `load` may be retried.
    Unavailable(String),
}

/// Stateful driver of one scene.
#[derive(Debug)]
pub struct SceneSession<S: Scene> {
    config: ChartConfig,
    state: SceneState,
    scene: Option<S>,
    controls: Option<S::Controls>,
    view: Option<S::View>,
    chart: Option<Chart>,
    tooltip: TooltipOverlay,
    rebuilds: usize,
}

impl<S: Scene> SceneSession<S> {
    /// Unloaded session rendering with `config`.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            state: SceneState::Uninitialized,
            scene: None,
            controls: None,
            view: None,
            chart: None,
            tooltip: TooltipOverlay::default(),
            rebuilds: 0,
        }
    }

    /// Fetch the dataset from `source` and reset controls to their initial values.
    ///
    /// On failure the session becomes [`SceneState::Unavailable`] and the error is returned.
    pub fn load(&mut self, source: &dyn DataSource) -> ReelResult<()> {
        match RecordStore::load(source) {
            Ok(store) => {
                self.attach(&store);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(scene = S::NAME, error = %err, "scene data unavailable");
                self.scene = None;
                self.controls = None;
                self.view = None;
                self.chart = None;
                self.state = SceneState::Unavailable(err.to_string());
                Err(err)
            }
        }
    }

    /// Use an already-loaded store (e.g. from [`crate::SharedRecords`]).
    pub fn attach(&mut self, store: &RecordStore) {
        let scene = S::prepare(store);
        self.controls = Some(scene.initial_controls());
        self.scene = Some(scene);
        self.view = None;
        self.chart = None;
        self.tooltip.hide();
        self.state = SceneState::Loaded;
        tracing::debug!(scene = S::NAME, records = store.len(), "scene loaded");
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Rendering configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current controls, once loaded.
    pub fn controls(&self) -> Option<&S::Controls> {
        self.controls.as_ref()
    }

    /// Apply a control change and rebuild the chart.
    ///
    /// When `change` fails the controls are left untouched and nothing is redrawn.
    pub fn update(
        &mut self,
        change: impl FnOnce(&mut S::Controls) -> ReelResult<()>,
    ) -> ReelResult<&Chart> {
        let current = self.controls.as_ref().ok_or_else(|| not_loaded(S::NAME))?;
        let mut next = current.clone();
        change(&mut next)?;
        self.controls = Some(next);
        self.redraw()
    }

    /// Discard the previous chart and build a new one from the current controls.
    pub fn redraw(&mut self) -> ReelResult<&Chart> {
        let (Some(scene), Some(controls)) = (self.scene.as_ref(), self.controls.as_ref()) else {
            return Err(not_loaded(S::NAME));
        };
        self.tooltip.hide();
        let view = scene.compute(controls);
        let chart = scene.render(&view, &self.config);
        self.rebuilds += 1;
        tracing::debug!(
            scene = S::NAME,
            rebuild = self.rebuilds,
            marks = chart.marks.len(),
            annotations = chart.annotations.len(),
            "scene rebuilt"
        );
        self.view = Some(view);
        self.state = SceneState::Rendered;
        Ok(self.chart.insert(chart))
    }

    /// View behind the current chart.
    pub fn view(&self) -> Option<&S::View> {
        self.view.as_ref()
    }

    /// Current chart.
    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Pointer entered mark `mark` at page position `pointer`.
    pub fn hover(&mut self, mark: usize, pointer: Point) -> ReelResult<()> {
        let chart = self
            .chart
            .as_ref()
            .ok_or_else(|| ReelError::evaluation(format!("{} has no chart to hover", S::NAME)))?;
        let content = chart.marks.get(mark).cloned().ok_or_else(|| {
            ReelError::validation(format!(
                "mark {mark} out of range ({} marks)",
                chart.marks.len()
            ))
        })?;
        self.tooltip.show(pointer, content);
        Ok(())
    }

    /// Pointer left the hovered mark.
    pub fn unhover(&mut self) {
        self.tooltip.hide();
    }

    /// The scene's tooltip overlay.
    pub fn tooltip(&self) -> &TooltipOverlay {
        &self.tooltip
    }

    /// Number of chart builds since the session was created.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }
}

fn not_loaded(scene: &str) -> ReelError {
    ReelError::evaluation(format!("{scene} scene has no data loaded"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/pipeline.rs"]
mod tests;
