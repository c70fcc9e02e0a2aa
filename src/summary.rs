//! Canned result text shown under the calculator forms.

use crate::domain::{RoiOutput, SimulationInput, SimulationOutput};
use crate::format::{format_percent, format_usd};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub heading: &'static str,
    pub lines: Vec<SummaryLine>,
    pub disclaimer: &'static str,
}

fn line(label: impl Into<String>, value: String) -> SummaryLine {
    SummaryLine {
        label: label.into(),
        value,
    }
}

pub fn simulation_summary(input: &SimulationInput, output: &SimulationOutput) -> Summary {
    Summary {
        heading: "Simulation Summary",
        lines: vec![
            line(
                format!("Projected value after {} years", input.years),
                format_usd(output.projected_value),
            ),
            line("Stress-tested scenario", format_usd(output.stress_value)),
            line(
                "Expected annualized volatility",
                format_percent(output.volatility_pct),
            ),
        ],
        disclaimer: "Outputs are hypothetical and not guarantees of future performance.",
    }
}

pub fn roi_summary(output: &RoiOutput) -> Summary {
    Summary {
        heading: "Return Comparison",
        lines: vec![
            line(
                "CAPPY optimized projection",
                format_usd(output.optimized_return),
            ),
            line(
                "Traditional model projection",
                format_usd(output.traditional_return),
            ),
            line("Potential uplift", format_percent(output.uplift_pct)),
        ],
        disclaimer: "Assumes reinvested returns and does not include fees or taxes.",
    }
}
