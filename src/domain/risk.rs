use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};

use crate::error::{SiteError, SiteResult};

/// Assumed annual rates behind a risk profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskParameters {
    pub growth: f64,
    pub volatility: f64,
    pub downside: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Growth,
}

impl RiskProfile {
    /// Parse a form key. Anything outside the three known keys is rejected.
    pub fn parse(key: &str) -> SiteResult<Self> {
        RiskProfile::from_str(key.trim())
            .map_err(|_| SiteError::UnknownRiskProfile(key.to_string()))
    }

    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Growth => "Growth",
        }
    }

    pub fn parameters(&self) -> RiskParameters {
        match self {
            RiskProfile::Conservative => RiskParameters {
                growth: 0.06,
                volatility: 0.08,
                downside: 0.09,
            },
            RiskProfile::Balanced => RiskParameters {
                growth: 0.095,
                volatility: 0.12,
                downside: 0.14,
            },
            RiskProfile::Growth => RiskParameters {
                growth: 0.14,
                volatility: 0.18,
                downside: 0.2,
            },
        }
    }
}
