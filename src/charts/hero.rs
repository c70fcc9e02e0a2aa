//! Ambient "live market" line behind the hero section. The data carries no
//! meaning; only the motion matters.

use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{SiteError, SiteResult};

pub const SERIES_START: f64 = 50.0;
pub const SERIES_FLOOR: f64 = 10.0;
/// Values are plotted against a fixed 0..100 vertical scale.
const VALUE_SCALE: f64 = 100.0;

const STROKE: &str = "rgba(227, 232, 242, 0.95)";
const GLOW: &str = "rgba(44, 177, 161, 0.45)";
const FILL_TOP: &str = "rgba(44, 177, 161, 0.85)";
const FILL_BOTTOM: &str = "rgba(6, 18, 37, 0.75)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// Random walk with a slow sinusoidal drift, floored at [`SERIES_FLOOR`].
pub fn generate_series<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<SeriesPoint> {
    let mut value = SERIES_START;
    (0..len)
        .map(|i| {
            let drift = (i as f64 / 12.0).sin() * 1.8;
            let noise = (rng.gen::<f64>() - 0.5) * 2.2;
            value = (value + drift + noise).max(SERIES_FLOOR);
            SeriesPoint {
                x: i as f64,
                y: value,
            }
        })
        .collect()
}

/// Map a series point into canvas pixels (origin top-left).
pub fn to_canvas(point: &SeriesPoint, len: usize, width: f64, height: f64) -> (f64, f64) {
    let x = point.x / len as f64 * width;
    let y = height - point.y / VALUE_SCALE * height;
    (x, y)
}

fn context_2d(canvas: &HtmlCanvasElement) -> SiteResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| SiteError::Rendering("hero canvas has no 2d context".to_string()))
}

fn js_err(e: JsValue) -> SiteError {
    SiteError::Rendering(format!("{:?}", e))
}

/// Clear the canvas and paint `points` as a glowing line over a gradient fill.
#[allow(deprecated)]
pub fn render_hero_chart(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) -> SiteResult<()> {
    let ctx = context_2d(canvas)?;
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);
    if points.is_empty() {
        return Ok(());
    }

    let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
    gradient.add_color_stop(0.0, FILL_TOP).map_err(js_err)?;
    gradient.add_color_stop(1.0, FILL_BOTTOM).map_err(js_err)?;

    ctx.begin_path();
    for (index, point) in points.iter().enumerate() {
        let (x, y) = to_canvas(point, points.len(), width, height);
        if index == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.set_stroke_style(&JsValue::from_str(STROKE));
    ctx.set_line_width(3.0);
    ctx.set_shadow_color(GLOW);
    ctx.set_shadow_blur(16.0);
    ctx.stroke();

    // Close down to the bottom corners so the fill sits under the line.
    ctx.line_to(width, height);
    ctx.line_to(0.0, height);
    ctx.close_path();
    ctx.set_fill_style(&gradient);
    ctx.fill();

    Ok(())
}

/// Generate a fresh series and draw it.
pub fn refresh(canvas: &HtmlCanvasElement, len: usize) -> SiteResult<()> {
    let points = generate_series(&mut rand::thread_rng(), len);
    render_hero_chart(canvas, &points)
}
