/// Errors surfaced by form parsing, static lookups and canvas rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    InvalidAmount(String),
    InvalidYears(String),
    UnknownRiskProfile(String),
    UnknownMarketCondition(String),
    MissingElement(&'static str),
    Rendering(String),
    Config(String),
}

impl std::fmt::Display for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::InvalidAmount(raw) => {
                write!(f, "Enter an investment amount greater than zero (got \"{}\")", raw)
            }
            SiteError::InvalidYears(raw) => {
                write!(f, "Enter a whole number of years from 1 to 100 (got \"{}\")", raw)
            }
            SiteError::UnknownRiskProfile(key) => write!(f, "Unknown risk profile \"{}\"", key),
            SiteError::UnknownMarketCondition(key) => {
                write!(f, "Unknown market condition \"{}\"", key)
            }
            SiteError::MissingElement(id) => write!(f, "Required element #{} is not in the page", id),
            SiteError::Rendering(msg) => write!(f, "Rendering error: {}", msg),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

pub type SiteResult<T> = Result<T, SiteError>;
