pub mod accordion;
pub mod calculator;
pub mod charts;
pub mod nav;
pub mod reveal_on_scroll;

pub use accordion::{AccordionItem, Faq};
pub use calculator::{MarketPlaybookPanel, RoiForm, SimulationForm};
pub use charts::{HeroChart, StatisticsCharts};
pub use nav::NavBar;
pub use reveal_on_scroll::Reveal;
