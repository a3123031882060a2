use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown region id: {0}")]
    UnknownRegion(String),

    #[error("unknown archetype id: {0}")]
    UnknownArchetype(String),

    #[error("unknown audience id: {0}")]
    UnknownAudience(String),

    /// A catalog entry whose formula denominator evaluates to zero.
    #[error("archetype {id} is misconfigured: {field} evaluates to zero")]
    DegenerateArchetype { id: String, field: &'static str },

    #[error("investment amount must be a positive finite number (got {0})")]
    InvalidInvestmentAmount(f64),
}

impl ScoringError {
    /// True for catalog problems (unknown ids, zero denominators), false for bad caller input.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::InvalidInvestmentAmount(_))
    }
}
