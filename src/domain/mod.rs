pub mod playbook;
pub mod projection;
pub mod risk;

pub use playbook::{lookup_playbook, MarketCondition, MarketPlaybook};
pub use projection::{
    compare_returns, simulate, RoiInput, RoiOutput, SimulationInput, SimulationOutput,
};
pub use risk::{RiskParameters, RiskProfile};
