use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid die face: {face} (expected 1-6)")]
    InvalidFace { face: String },
    #[error("Roll contains no dice")]
    EmptyRoll,
    #[error("Rule '{name}' declares {declared} dice but its criteria require {actual}")]
    TotalDiceMismatch {
        name: String,
        declared: u32,
        actual: u32,
    },
    #[error("Rule '{name}' needs more dice than can be counted")]
    DiceCountOverflow { name: String },
    #[error("Rule '{name}' has no criteria")]
    EmptyCriteria { name: String },
    #[error("Rule '{name}' has a criterion with zero quantity")]
    ZeroQuantity { name: String },
    #[error("Duplicate rule name: {name}")]
    DuplicateRuleName { name: String },
    #[error("Invalid criterion target: {target} (expected a face 1-6 or \"*\")")]
    InvalidTarget { target: String },
}
