pub mod datasets;
pub mod hero;
pub mod stats;

use crate::logging::{self, LogComponent};

/// Draw the three statistics charts. A failure in one does not stop the others.
pub fn draw_statistics() {
    let results = [
        ("performance", stats::draw_line_chart(&datasets::PERFORMANCE)),
        ("regime", stats::draw_doughnut_chart(&datasets::REGIMES)),
        ("volatility", stats::draw_bar_chart(&datasets::VOLATILITY)),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            logging::error(
                LogComponent::StatsCharts,
                &format!("{} chart failed: {}", name, e),
            );
        }
    }
}
