use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::charts::datasets::{
    value_bounds, BarChartSpec, DoughnutSpec, LineChartSpec, INK, MIST, SILVER,
};
use crate::error::SiteError;

const LEGEND_HEIGHT: u32 = 40;
const RING_STEPS: usize = 48;

fn grid_color() -> RGBAColor {
    SILVER.mix(0.08)
}

fn backend(canvas_id: &'static str) -> Result<CanvasBackend, SiteError> {
    CanvasBackend::new(canvas_id).ok_or(SiteError::MissingElement(canvas_id))
}

/// Y-axis tick label for percentage axes.
pub fn percent_tick(value: f64) -> String {
    format!("{}%", value)
}

/// Start and end angles (radians) of each doughnut segment, clockwise from
/// 12 o'clock in screen coordinates.
pub fn segment_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let end = start + v / total * TAU;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Outline of a ring segment: the outer arc forward, then the inner arc back.
pub fn ring_segment(
    center: (f64, f64),
    outer: f64,
    inner: f64,
    (start, end): (f64, f64),
    steps: usize,
) -> Vec<(i32, i32)> {
    let steps = steps.max(1);
    let arc = |radius: f64, t: f64| {
        let angle = start + (end - start) * t;
        (
            (center.0 + radius * angle.cos()).round() as i32,
            (center.1 + radius * angle.sin()).round() as i32,
        )
    };
    let outer_arc = (0..=steps).map(|i| arc(outer, i as f64 / steps as f64));
    let inner_arc = (0..=steps).rev().map(|i| arc(inner, i as f64 / steps as f64));
    outer_arc.chain(inner_arc).collect()
}

/// Horizontal extent of bar `series` within `category` when `series_count`
/// bars share a category slot of width 1.
pub fn bar_span(category: usize, series: usize, series_count: usize) -> (f64, f64) {
    let width = 0.8 / series_count.max(1) as f64;
    let left = category as f64 + 0.1 + series as f64 * width;
    (left, left + width)
}

pub fn draw_line_chart(spec: &LineChartSpec) -> Result<(), Box<dyn std::error::Error>> {
    let root = backend(spec.canvas_id)?.into_drawing_area();
    root.fill(&INK)?;

    if spec.labels.len() < 2 || spec.series.is_empty() {
        return Ok(());
    }

    let (min, max) = value_bounds(spec.series);
    let pad = (max - min) * 0.1;
    let last = (spec.labels.len() - 1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..last, (min - pad)..(max + pad))?;

    chart
        .configure_mesh()
        .x_labels(spec.labels.len())
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                spec.labels.get(idx as usize).map(|l| l.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .bold_line_style(grid_color())
        .light_line_style(TRANSPARENT)
        .axis_style(SILVER)
        .label_style(("sans-serif", 12).into_font().color(&SILVER))
        .draw()?;

    for series in spec.series {
        let color = series.color;
        chart
            .draw_series(
                AreaSeries::new(
                    series.values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                    min - pad,
                    color.mix(series.alpha),
                )
                .border_style(color.stroke_width(2)),
            )?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(INK.mix(0.8))
        .border_style(grid_color())
        .label_font(("sans-serif", 12).into_font().color(&MIST))
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn draw_doughnut_chart(spec: &DoughnutSpec) -> Result<(), Box<dyn std::error::Error>> {
    let root = backend(spec.canvas_id)?.into_drawing_area();
    root.fill(&INK)?;

    let (width, height) = root.dim_in_pixel();
    let ring_height = height.saturating_sub(LEGEND_HEIGHT) as f64;
    let center = (width as f64 / 2.0, ring_height / 2.0);
    let outer = (width as f64).min(ring_height) / 2.0 - 8.0;
    if outer <= 0.0 {
        return Ok(());
    }
    let inner = outer * 0.5;

    for (i, span) in segment_angles(spec.values).into_iter().enumerate() {
        let color = spec.colors[i % spec.colors.len()];
        let outline = ring_segment(center, outer, inner, span, RING_STEPS);
        root.draw(&Polygon::new(outline.clone(), color.filled()))?;

        let mut closed = outline;
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        root.draw(&PathElement::new(closed, spec.border.stroke_width(2)))?;
    }

    // Legend row under the ring.
    let slot = width as i32 / spec.labels.len().max(1) as i32;
    let legend_y = height as i32 - LEGEND_HEIGHT as i32 / 2;
    for (i, label) in spec.labels.iter().enumerate() {
        let color = spec.colors[i % spec.colors.len()];
        let x = slot * i as i32 + 8;
        root.draw(&Rectangle::new(
            [(x, legend_y - 6), (x + 12, legend_y + 6)],
            color.filled(),
        ))?;
        root.draw(&Text::new(
            label.to_string(),
            (x + 18, legend_y - 7),
            ("sans-serif", 12).into_font().color(&MIST),
        ))?;
    }

    root.present()?;
    Ok(())
}

pub fn draw_bar_chart(spec: &BarChartSpec) -> Result<(), Box<dyn std::error::Error>> {
    let root = backend(spec.canvas_id)?.into_drawing_area();
    root.fill(&INK)?;

    if spec.categories.is_empty() || spec.series.is_empty() {
        return Ok(());
    }

    let (min, max) = value_bounds(spec.series);
    let lo = min.min(0.0) - 5.0;
    let hi = max.max(0.0) + 5.0;
    let categories = spec.categories.len();

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..categories as f64, lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories * 2 + 1)
        .x_label_formatter(&|x| {
            let idx = (x - 0.5).round();
            if (x - 0.5 - idx).abs() < 1e-6 && idx >= 0.0 {
                spec.categories.get(idx as usize).map(|c| c.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y| percent_tick(*y))
        .bold_line_style(grid_color())
        .light_line_style(TRANSPARENT)
        .axis_style(SILVER)
        .label_style(("sans-serif", 12).into_font().color(&SILVER))
        .draw()?;

    let series_count = spec.series.len();
    for (s, series) in spec.series.iter().enumerate() {
        let fill = series.color.mix(series.alpha);
        chart
            .draw_series(series.values.iter().enumerate().map(|(c, v)| {
                let (x0, x1) = bar_span(c, s, series_count);
                Rectangle::new([(x0, 0.0), (x1, *v)], fill.filled())
            }))?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(INK.mix(0.8))
        .border_style(grid_color())
        .label_font(("sans-serif", 12).into_font().color(&MIST))
        .draw()?;

    root.present()?;
    Ok(())
}
