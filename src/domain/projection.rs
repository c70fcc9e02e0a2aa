//! Hypothetical growth projections behind the simulation and ROI forms.
//!
//! Raw form strings go through [`SimulationInput::parse`] / [`RoiInput::parse`]
//! first; the calculation functions only ever see validated input.

use crate::domain::risk::RiskProfile;
use crate::error::{SiteError, SiteResult};

/// Annual multiplier for the optimized strategy in the ROI comparison.
pub const OPTIMIZED_ANNUAL_MULTIPLIER: f64 = 1.118;
/// Annual multiplier for the traditional benchmark in the ROI comparison.
pub const TRADITIONAL_ANNUAL_MULTIPLIER: f64 = 1.073;
/// Longest horizon the forms accept.
pub const MAX_YEARS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    pub amount: f64,
    pub risk: RiskProfile,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOutput {
    pub projected_value: f64,
    pub stress_value: f64,
    pub volatility_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInput {
    pub amount: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiOutput {
    pub optimized_return: f64,
    pub traditional_return: f64,
    pub uplift_pct: f64,
}

pub fn parse_amount(raw: &str) -> SiteResult<f64> {
    let amount = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| SiteError::InvalidAmount(raw.to_string()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SiteError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

pub fn parse_years(raw: &str) -> SiteResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(years) if (1..=MAX_YEARS).contains(&years) => Ok(years),
        _ => Err(SiteError::InvalidYears(raw.to_string())),
    }
}

impl SimulationInput {
    pub fn parse(amount: &str, risk: &str, years: &str) -> SiteResult<Self> {
        Ok(Self {
            amount: parse_amount(amount)?,
            risk: RiskProfile::parse(risk)?,
            years: parse_years(years)?,
        })
    }
}

impl RoiInput {
    pub fn parse(amount: &str, years: &str) -> SiteResult<Self> {
        Ok(Self {
            amount: parse_amount(amount)?,
            years: parse_years(years)?,
        })
    }
}

/// The stress path runs one period shorter than the projection, never below
/// a single period.
pub fn stress_exponent(years: u32) -> i32 {
    growth_exponent(years).saturating_sub(1).max(1)
}

/// `powi` takes an `i32`; horizons beyond it saturate rather than wrap.
fn growth_exponent(years: u32) -> i32 {
    i32::try_from(years).unwrap_or(i32::MAX)
}

pub fn simulate(input: &SimulationInput) -> SimulationOutput {
    let params = input.risk.parameters();
    let projected_value = input.amount * (1.0 + params.growth).powi(growth_exponent(input.years));
    let stress_value = input.amount
        * (1.0 + (params.growth - params.downside)).powi(stress_exponent(input.years));

    SimulationOutput {
        projected_value,
        stress_value,
        volatility_pct: params.volatility * 100.0,
    }
}

pub fn compare_returns(input: &RoiInput) -> RoiOutput {
    let years = growth_exponent(input.years);
    let optimized_return = input.amount * OPTIMIZED_ANNUAL_MULTIPLIER.powi(years);
    let traditional_return = input.amount * TRADITIONAL_ANNUAL_MULTIPLIER.powi(years);
    let uplift_pct = (optimized_return - traditional_return) / traditional_return * 100.0;

    RoiOutput {
        optimized_return,
        traditional_return,
        uplift_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_rejects_blank_and_non_positive() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-50").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert_eq!(parse_amount(" 2500.5 "), Ok(2500.5));
    }

    #[test]
    fn years_must_be_whole_and_positive() {
        assert!(parse_years("0").is_err());
        assert!(parse_years("2.5").is_err());
        assert!(parse_years("").is_err());
        assert_eq!(parse_years("15"), Ok(15));
        assert_eq!(parse_years("100"), Ok(MAX_YEARS));
        assert!(parse_years("101").is_err());
        assert!(parse_years("3000000000").is_err());
    }

    #[test]
    fn stress_exponent_floors_at_one() {
        assert_eq!(stress_exponent(0), 1);
        assert_eq!(stress_exponent(1), 1);
        assert_eq!(stress_exponent(2), 1);
        assert_eq!(stress_exponent(10), 9);
        assert_eq!(stress_exponent(2_147_483_648), i32::MAX - 1);
        assert_eq!(stress_exponent(u32::MAX), i32::MAX - 1);
    }

    #[test]
    fn horizons_past_i32_saturate_instead_of_wrapping() {
        let output = simulate(&SimulationInput {
            amount: 10_000.0,
            risk: RiskProfile::Balanced,
            years: u32::MAX,
        });
        assert!(output.projected_value.is_infinite());
        assert!(output.projected_value > 0.0);
        assert!(output.stress_value >= 0.0);
    }
}
