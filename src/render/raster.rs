//! SVG validation and PNG output.

use std::{
    path::Path,
    sync::{Arc, OnceLock},
};

use anyhow::Context as _;

use crate::{
    config::RasterSettings,
    foundation::error::{ReelError, ReelResult},
    scene::pipeline::Chart,
};

// Guards against pathological allocations from oversized layouts or scales.
const MAX_DIM: u32 = 16_384;

/// Output file format, picked from the path extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG text.
    Svg,
    /// Rasterized PNG.
    Png,
}

impl OutputFormat {
    /// Format for `path` (`.svg` or `.png`, case-insensitive).
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(ReelError::validation(format!(
                "output '{}' must end in .svg or .png",
                path.display()
            ))),
        }
    }
}

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes.
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = self.rgba8.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }
}

fn fonts() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "system fonts loaded");
            Arc::new(db)
        })
        .clone()
}

/// Parse SVG text into a render tree, resolving text against system fonts.
pub fn parse_svg(text: &str) -> ReelResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: fonts(),
        ..Default::default()
    };
    usvg::Tree::from_str(text, &opts).map_err(|e| ReelError::render(format!("parse svg: {e}")))
}

/// Rasterize `tree` over an opaque background at `settings.scale`.
pub fn rasterize(tree: &usvg::Tree, settings: &RasterSettings) -> ReelResult<RasterImage> {
    fn to_px(v: f32) -> ReelResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ReelError::render("svg has invalid width/height"));
        }
        let px = (v.ceil() as u32).max(1);
        if px > MAX_DIM {
            return Err(ReelError::render(format!(
                "raster size too large: {px} (max {MAX_DIM})"
            )));
        }
        Ok(px)
    }

    let scale = settings.scale;
    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ReelError::render("failed to allocate pixmap"))?;
    let bg = settings.background;
    pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let rgba8 = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

/// Write `chart` to `path` as SVG or PNG (by extension), creating parent directories.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_chart(chart: &Chart, path: &Path, settings: &RasterSettings) -> ReelResult<()> {
    let format = OutputFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let svg = chart.to_svg_string();
    match format {
        OutputFormat::Svg => {
            std::fs::write(path, svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
        }
        OutputFormat::Png => {
            let tree = parse_svg(&svg)?;
            let raster = rasterize(&tree, settings)?;
            image::save_buffer_with_format(
                path,
                &raster.rgba8,
                raster.width,
                raster.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
        }
    }
    tracing::info!(?format, "chart written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
