use plotters::style::RGBColor;

pub const TEAL: RGBColor = RGBColor(44, 177, 161);
pub const SILVER: RGBColor = RGBColor(192, 199, 214);
pub const DEEP_TEAL: RGBColor = RGBColor(31, 155, 130);
pub const AQUA: RGBColor = RGBColor(58, 196, 192);
pub const INK: RGBColor = RGBColor(3, 9, 16);
pub const MIST: RGBColor = RGBColor(227, 232, 242);

#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub values: &'static [f64],
    pub color: RGBColor,
    /// Opacity of the area under a line, or of the bar fill.
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct LineChartSpec {
    pub canvas_id: &'static str,
    pub labels: &'static [&'static str],
    pub series: &'static [SeriesSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct DoughnutSpec {
    pub canvas_id: &'static str,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
    pub colors: &'static [RGBColor],
    pub border: RGBColor,
}

#[derive(Debug, Clone, Copy)]
pub struct BarChartSpec {
    pub canvas_id: &'static str,
    pub categories: &'static [&'static str],
    pub series: &'static [SeriesSpec],
}

pub const PERFORMANCE: LineChartSpec = LineChartSpec {
    canvas_id: "performanceChart",
    labels: &["2019", "2020", "2021", "2022", "2023", "2024"],
    series: &[
        SeriesSpec {
            label: "CAPPY Optimized",
            values: &[100.0, 118.0, 156.0, 172.0, 198.0, 234.0],
            color: TEAL,
            alpha: 0.15,
        },
        SeriesSpec {
            label: "Benchmark Index",
            values: &[100.0, 110.0, 132.0, 140.0, 159.0, 176.0],
            color: SILVER,
            alpha: 0.05,
        },
    ],
};

pub const REGIMES: DoughnutSpec = DoughnutSpec {
    canvas_id: "regimeChart",
    labels: &["Expansion", "Correction", "Volatile", "Recession"],
    values: &[42.0, 23.0, 21.0, 14.0],
    colors: &[TEAL, DEEP_TEAL, AQUA, SILVER],
    border: INK,
};

pub const VOLATILITY: BarChartSpec = BarChartSpec {
    canvas_id: "volatilityChart",
    categories: &["Drawdown", "Recovery", "Return"],
    series: &[
        SeriesSpec {
            label: "Traditional Portfolio",
            values: &[-22.0, 14.0, 8.0],
            color: SILVER,
            alpha: 0.5,
        },
        SeriesSpec {
            label: "CAPPY Adaptive",
            values: &[-12.0, 18.0, 15.0],
            color: TEAL,
            alpha: 0.7,
        },
    ],
};

/// Min and max over every value in `series`.
pub fn value_bounds(series: &[SeriesSpec]) -> (f64, f64) {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}
