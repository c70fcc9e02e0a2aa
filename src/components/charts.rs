use gloo::timers::callback::Interval;
use leptos::*;
use web_sys::HtmlCanvasElement;

use crate::charts::{self, datasets, hero};
use crate::config::SiteConfig;
use crate::logging::{self, LogComponent};

fn redraw_hero(canvas: &HtmlCanvasElement, points: usize) {
    if let Err(e) = hero::refresh(canvas, points) {
        logging::error(LogComponent::HeroChart, &e.to_string());
    }
}

/// Decorative chart that regenerates its data on a timer for as long as it
/// is mounted.
#[component]
pub fn HeroChart() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let points = config.hero_points;
    let refresh_ms = config.hero_refresh_ms;
    let canvas_ref = create_node_ref::<html::Canvas>();
    let ticker = store_value(None::<Interval>);

    canvas_ref.on_load(move |canvas| {
        let canvas: HtmlCanvasElement = (*canvas).clone();
        redraw_hero(&canvas, points);

        let interval = Interval::new(refresh_ms, move || redraw_hero(&canvas, points));
        // If the component is already gone the interval is dropped, which cancels it.
        let _ = ticker.try_update_value(|slot| *slot = Some(interval));
    });

    on_cleanup(move || {
        let _ = ticker.try_update_value(Option::take);
        logging::debug(LogComponent::HeroChart, "refresh stopped");
    });

    view! {
        <canvas
            node_ref=canvas_ref
            id="hero-chart"
            class="w-full h-auto"
            width="960"
            height="360"
            aria-hidden="true"
        ></canvas>
    }
}

#[component]
fn ChartCard(
    canvas_id: &'static str,
    title: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <figure class="rounded-xl bg-slate-900 p-4 shadow">
            <h3 class="text-lg font-semibold mb-3">{title}</h3>
            <canvas id=canvas_id width="640" height="320" class="w-full h-auto"></canvas>
            <figcaption class="text-xs text-slate-400 mt-2">{caption}</figcaption>
        </figure>
    }
}

/// The three static statistics charts. Drawing waits one frame so the
/// canvases are attached to the document before plotters looks them up.
#[component]
pub fn StatisticsCharts() -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    container.on_load(|_| request_animation_frame(charts::draw_statistics));

    view! {
        <div node_ref=container class="grid gap-6 md:grid-cols-3">
            <ChartCard
                canvas_id=datasets::PERFORMANCE.canvas_id
                title="Growth of $100"
                caption="Indexed cumulative return, 2019 = 100."
            />
            <ChartCard
                canvas_id=datasets::REGIMES.canvas_id
                title="Market regimes since 2019"
                caption="Share of trading days classified per regime."
            />
            <ChartCard
                canvas_id=datasets::VOLATILITY.canvas_id
                title="Stress behavior"
                caption="Average drawdown, recovery and return across stress episodes."
            />
        </div>
    }
}
