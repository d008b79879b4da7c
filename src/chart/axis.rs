//! Bottom/left axes drawn as SVG groups.

use crate::chart::{
    format::{format_fixed, precision_for_step},
    scale::{BandScale, LinearScale},
    svg::{SvgElement, fmt_num, translate},
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
/// Tick count requested from linear scales.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Which side of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis below the plot, labels underneath.
    Bottom,
    /// Vertical axis left of the plot, labels to the left.
    Left,
}

/// Axis for a linear scale. `format` renders tick labels; `None` picks a
/// fixed-decimal format from the tick spacing.
pub fn linear_axis(
    scale: &LinearScale,
    orient: AxisOrient,
    format: Option<&dyn Fn(f64) -> String>,
) -> SvgElement {
    let values = scale.ticks(DEFAULT_TICK_COUNT);
    let decimals = precision_for_step(scale.tick_step(DEFAULT_TICK_COUNT));
    let ticks = values.into_iter().map(|v| {
        let label = match format {
            Some(f) => f(v),
            None => format_fixed(v, decimals),
        };
        (scale.apply(v), label)
    });
    axis_group(orient, scale.range(), ticks)
}

/// Axis for a band scale with one tick per band center.
pub fn band_axis(scale: &BandScale, orient: AxisOrient, range: (f64, f64)) -> SvgElement {
    let ticks = scale
        .keys()
        .iter()
        .filter_map(|k| scale.center(k).map(|pos| (pos, k.clone())));
    axis_group(orient, range, ticks)
}

fn axis_group(
    orient: AxisOrient,
    range: (f64, f64),
    ticks: impl Iterator<Item = (f64, String)>,
) -> SvgElement {
    let (r0, r1) = range;
    let (anchor, domain_path) = match orient {
        AxisOrient::Bottom => (
            "middle",
            format!(
                "M{},{}V0H{}V{}",
                fmt_num(r0),
                fmt_num(TICK_SIZE),
                fmt_num(r1),
                fmt_num(TICK_SIZE)
            ),
        ),
        AxisOrient::Left => (
            "end",
            format!(
                "M{},{}H0V{}H{}",
                fmt_num(-TICK_SIZE),
                fmt_num(r0),
                fmt_num(r1),
                fmt_num(-TICK_SIZE)
            ),
        ),
    };

    let mut group = SvgElement::new("g")
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
        .child(
            SvgElement::new("path")
                .class("domain")
                .attr("stroke", "#000")
                .attr("d", domain_path),
        );

    for (pos, label) in ticks {
        if !pos.is_finite() {
            continue;
        }
        let tick = match orient {
            AxisOrient::Bottom => SvgElement::new("g")
                .class("tick")
                .attr("transform", translate(pos, 0.0))
                .child(
                    SvgElement::new("line")
                        .attr("stroke", "#000")
                        .num("y2", TICK_SIZE),
                )
                .child(
                    SvgElement::new("text")
                        .attr("fill", "#000")
                        .num("y", TICK_SIZE + TICK_PADDING)
                        .attr("dy", "0.71em")
                        .text(label),
                ),
            AxisOrient::Left => SvgElement::new("g")
                .class("tick")
                .attr("transform", translate(0.0, pos))
                .child(
                    SvgElement::new("line")
                        .attr("stroke", "#000")
                        .num("x2", -TICK_SIZE),
                )
                .child(
                    SvgElement::new("text")
                        .attr("fill", "#000")
                        .num("x", -(TICK_SIZE + TICK_PADDING))
                        .attr("dy", "0.32em")
                        .text(label),
                ),
        };
        group.push(tick);
    }
    group
}

/// Axis title text. Left titles are rotated a quarter turn counter-clockwise.
pub fn axis_title(text: &str, x: f64, y: f64, orient: AxisOrient, anchor: &str) -> SvgElement {
    let title = SvgElement::new("text")
        .class("axis-label")
        .num("x", x)
        .num("y", y)
        .attr("font-size", 12)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
        .attr("fill", "#000");
    match orient {
        AxisOrient::Bottom => title.text(text),
        AxisOrient::Left => title.attr("transform", "rotate(-90)").text(text),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/axis.rs"]
mod tests;
