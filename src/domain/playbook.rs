use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};

use crate::error::{SiteError, SiteResult};

/// Market regimes offered by the playbook selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MarketCondition {
    Bull,
    Bear,
    Volatile,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketPlaybook {
    pub heading: &'static str,
    pub summary: &'static str,
    pub actions: &'static [&'static str],
}

const BULL: MarketPlaybook = MarketPlaybook {
    heading: "Bull Market Momentum",
    summary: "Amplify factor rotations and lean into momentum while capping leverage.",
    actions: &[
        "Increase cyclical sector weighting by up to 12%.",
        "Tilt toward quality growth names with improving earnings revisions.",
        "Lock-in gains via trailing stop logic to protect recent alpha.",
    ],
};

const BEAR: MarketPlaybook = MarketPlaybook {
    heading: "Defensive Shield Deployment",
    summary: "Conserve capital with low-volatility tilts and tactical hedging.",
    actions: &[
        "Shift 18% into minimum-variance equity sleeves and protective puts.",
        "Deploy machine-learning signals to identify short-term relief rallies.",
        "Harvest tax losses to redeploy into correlated alternatives.",
    ],
};

const VOLATILE: MarketPlaybook = MarketPlaybook {
    heading: "Volatility Harvest Strategy",
    summary: "Exploit dispersion with adaptive risk budgets and spread trades.",
    actions: &[
        "Allocate to statistical arbitrage sleeves to monetize dispersion.",
        "Widen guardrail corridors and shorten rebalancing windows to 24 hours.",
        "Dynamically adjust cash buffers to stabilize portfolio beta.",
    ],
};

const SIDEWAYS: MarketPlaybook = MarketPlaybook {
    heading: "Market Neutral Precision",
    summary: "Seek idiosyncratic alpha via factor neutralization.",
    actions: &[
        "Deploy market-neutral pairs to capture micro-structure dislocations.",
        "Optimize dividend capture and factor neutrality for low drift.",
        "Reinvest tax alpha into underweight secular growth themes.",
    ],
};

impl MarketCondition {
    pub fn parse(key: &str) -> SiteResult<Self> {
        MarketCondition::from_str(key.trim())
            .map_err(|_| SiteError::UnknownMarketCondition(key.to_string()))
    }

    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketCondition::Bull => "Bull market",
            MarketCondition::Bear => "Bear market",
            MarketCondition::Volatile => "High volatility",
            MarketCondition::Sideways => "Sideways market",
        }
    }

    pub fn playbook(&self) -> &'static MarketPlaybook {
        match self {
            MarketCondition::Bull => &BULL,
            MarketCondition::Bear => &BEAR,
            MarketCondition::Volatile => &VOLATILE,
            MarketCondition::Sideways => &SIDEWAYS,
        }
    }
}

/// Resolve a select value straight to its playbook.
pub fn lookup_playbook(key: &str) -> SiteResult<&'static MarketPlaybook> {
    MarketCondition::parse(key).map(|condition| condition.playbook())
}
