//! Chart layout, palette and raster settings.
//!
//! Every field has a default matching the stock page layout, so an empty
//! JSON object (or no config file at all) is valid. Scene layouts given in a
//! config file are patched field-by-field onto that scene's defaults.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Margin, Point, Rgb8, Vec2},
    error::{ReelError, ReelResult},
};

/// Canvas geometry of one scene.
///
/// `width`/`height` minus the margins give the plot area. The SVG itself is
/// enlarged by `extra_width`/`extra_height` and the plot group is shifted by
/// `plot_offset`, leaving room for annotations above the plot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneLayout {
    /// Nominal chart width including margins.
    pub width: f64,
    /// Nominal chart height including margins.
    pub height: f64,
    /// Plot margins.
    pub margin: Margin,
    /// Extra SVG width beyond `width`.
    pub extra_width: f64,
    /// Extra SVG height beyond `height`.
    pub extra_height: f64,
    /// Additional shift of the plot group.
    pub plot_offset: Vec2,
}

impl SceneLayout {
    /// Genre ranking bar chart.
    pub fn ranking() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: Margin::new(30.0, 30.0, 50.0, 60.0),
            extra_width: 0.0,
            extra_height: 0.0,
            plot_offset: Vec2::ZERO,
        }
    }

    /// Budget/gross scatter plot.
    pub fn scatter() -> Self {
        Self {
            extra_width: 200.0,
            extra_height: 100.0,
            plot_offset: Vec2::new(0.0, 100.0),
            ..Self::ranking()
        }
    }

    /// Score bubble chart.
    pub fn bubbles() -> Self {
        Self {
            margin: Margin::new(30.0, 30.0, 100.0, 60.0),
            extra_width: 100.0,
            extra_height: 100.0,
            plot_offset: Vec2::new(10.0, 100.0),
            ..Self::ranking()
        }
    }

    /// Plot area width.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Plot area height.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Full SVG width.
    pub fn svg_width(&self) -> f64 {
        self.width + self.extra_width
    }

    /// Full SVG height.
    pub fn svg_height(&self) -> f64 {
        self.height + self.extra_height
    }

    /// Top-left corner of the plot group inside the SVG.
    pub fn plot_origin(&self) -> Point {
        Point::new(
            self.margin.left + self.plot_offset.x,
            self.margin.top + self.plot_offset.y,
        )
    }

    fn validate(&self, scene: &str) -> ReelResult<()> {
        let all = [
            self.width,
            self.height,
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
            self.extra_width,
            self.extra_height,
            self.plot_offset.x,
            self.plot_offset.y,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ReelError::validation(format!(
                "{scene} layout values must be finite"
            )));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ReelError::validation(format!(
                "{scene} layout leaves no plot area ({}x{})",
                self.inner_width(),
                self.inner_height()
            )));
        }
        if self.extra_width < 0.0 || self.extra_height < 0.0 {
            return Err(ReelError::validation(format!(
                "{scene} extra width/height must be >= 0"
            )));
        }
        Ok(())
    }
}

/// Fill colors of the chart marks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Ranking bars.
    pub bar: Rgb8,
    /// Scatter points.
    pub point: Rgb8,
    /// Bubble color at the lowest score.
    pub bubble_low: Rgb8,
    /// Bubble color at the highest score.
    pub bubble_high: Rgb8,
    /// Annotation strokes and text.
    pub annotation: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar: Rgb8::new(0x46, 0x82, 0xb4),
            point: Rgb8::new(0x80, 0x00, 0x80),
            bubble_low: Rgb8::new(0xf6, 0xec, 0xf9),
            bubble_high: Rgb8::new(0x92, 0x00, 0x85),
            annotation: Rgb8::new(0x33, 0x33, 0x33),
        }
    }
}

/// PNG output settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    /// Opaque background painted under the chart.
    pub background: Rgb8,
    /// Device pixels per SVG pixel.
    pub scale: f32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            background: Rgb8::WHITE,
            scale: 1.0,
        }
    }
}

/// Complete rendering configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "ConfigFile")]
pub struct ChartConfig {
    /// Scene 1 geometry.
    pub ranking: SceneLayout,
    /// Scene 2 geometry.
    pub scatter: SceneLayout,
    /// Scene 3 geometry.
    pub bubbles: SceneLayout,
    /// Mark colors.
    pub palette: Palette,
    /// PNG settings.
    pub raster: RasterSettings,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ranking: SceneLayout::ranking(),
            scatter: SceneLayout::scatter(),
            bubbles: SceneLayout::bubbles(),
            palette: Palette::default(),
            raster: RasterSettings::default(),
        }
    }
}

impl ChartConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> ReelResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate JSON config text.
    pub fn from_json(text: &str) -> ReelResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ReelError::serde(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry without a plot area and non-positive raster scales.
    pub fn validate(&self) -> ReelResult<()> {
        self.ranking.validate("ranking")?;
        self.scatter.validate("scatter")?;
        self.bubbles.validate("bubbles")?;
        if !(self.raster.scale.is_finite() && self.raster.scale > 0.0) {
            return Err(ReelError::validation("raster scale must be > 0"));
        }
        Ok(())
    }
}

#[derive(Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LayoutPatch {
    width: Option<f64>,
    height: Option<f64>,
    margin: Option<Margin>,
    extra_width: Option<f64>,
    extra_height: Option<f64>,
    plot_offset: Option<Vec2>,
}

impl LayoutPatch {
    fn apply(self, mut base: SceneLayout) -> SceneLayout {
        if let Some(v) = self.width {
            base.width = v;
        }
        if let Some(v) = self.height {
            base.height = v;
        }
        if let Some(v) = self.margin {
            base.margin = v;
        }
        if let Some(v) = self.extra_width {
            base.extra_width = v;
        }
        if let Some(v) = self.extra_height {
            base.extra_height = v;
        }
        if let Some(v) = self.plot_offset {
            base.plot_offset = v;
        }
        base
    }
}

#[derive(Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    ranking: LayoutPatch,
    scatter: LayoutPatch,
    bubbles: LayoutPatch,
    palette: Palette,
    raster: RasterSettings,
}

impl From<ConfigFile> for ChartConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            ranking: file.ranking.apply(SceneLayout::ranking()),
            scatter: file.scatter.apply(SceneLayout::scatter()),
            bubbles: file.bubbles.apply(SceneLayout::bubbles()),
            palette: file.palette,
            raster: file.raster,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
