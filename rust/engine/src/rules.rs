use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::{is_valid_face, Face};
use crate::errors::GameError;

/// What a criterion is matched against: one specific face, or any face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub enum Target {
    /// A specific face value
    Face(Face),
    /// Wildcard: whichever face has enough dice
    Any,
}

impl Target {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Target::Any)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Face(v) => write!(f, "{}", v),
            Target::Any => write!(f, "*"),
        }
    }
}

// Catalog files write wildcards as "*" and faces as plain integers.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Face(Face),
    Symbol(String),
}

impl TryFrom<TargetRepr> for Target {
    type Error = GameError;

    fn try_from(repr: TargetRepr) -> Result<Self, Self::Error> {
        match repr {
            TargetRepr::Face(v) => Ok(Target::Face(v)),
            TargetRepr::Symbol(s) if s == "*" => Ok(Target::Any),
            TargetRepr::Symbol(s) => Err(GameError::InvalidTarget { target: s }),
        }
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        match target {
            Target::Face(v) => TargetRepr::Face(v),
            Target::Any => TargetRepr::Symbol("*".to_string()),
        }
    }
}

/// One required condition of a rule: `quantity` dice showing `target`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub quantity: u32,
    #[serde(rename = "value")]
    pub target: Target,
}

impl Criterion {
    pub fn face(quantity: u32, face: Face) -> Self {
        Self {
            quantity,
            target: Target::Face(face),
        }
    }

    pub fn any(quantity: u32) -> Self {
        Self {
            quantity,
            target: Target::Any,
        }
    }
}

/// A scoring combination from the rule catalog.
///
/// `total_dice` is expected to equal the sum of the criteria quantities.
/// Scoring trusts it as given; [`validate_catalog`] checks it for loaders.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule identifier (e.g. "Triple 1s")
    pub name: String,
    /// Conditions the roll must satisfy, in presentation order
    pub criteria: Vec<Criterion>,
    /// Points awarded per application
    pub point_value: u32,
    /// Dice consumed by one application
    pub total_dice: u32,
    /// Whether the rule takes part in scoring for the current game
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether the rule belongs to the stock catalog
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

fn default_true() -> bool {
    true
}

impl Rule {
    /// Creates an active, non-default rule; `total_dice` is derived from the
    /// criteria and saturates at `u32::MAX`.
    pub fn new(name: impl Into<String>, criteria: Vec<Criterion>, point_value: u32) -> Self {
        let total_dice = criteria
            .iter()
            .map(|c| c.quantity)
            .fold(0u32, u32::saturating_add);
        Self {
            name: name.into(),
            criteria,
            point_value,
            total_dice,
            active: true,
            is_default: false,
        }
    }

    /// Rule needing `quantity` dice of one face.
    pub fn fixed(name: impl Into<String>, quantity: u32, face: Face, point_value: u32) -> Self {
        Self::new(name, vec![Criterion::face(quantity, face)], point_value)
    }

    pub fn is_wildcard_only(&self) -> bool {
        !self.criteria.is_empty() && self.criteria.iter().all(|c| c.target.is_wildcard())
    }

    fn stock(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// The stock Farkle catalog, in catalog order.
///
/// Order matters: equal point values are resolved in favour of the rule
/// listed first.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::fixed("Standard 100", 1, 1, 100).stock(),
        Rule::fixed("Standard 50", 1, 5, 50).stock(),
        Rule::fixed("Triple 1s", 3, 1, 1000).stock(),
        Rule::fixed("Triple 2s", 3, 2, 200).stock(),
        Rule::fixed("Triple 3s", 3, 3, 300).stock(),
        Rule::fixed("Triple 4s", 3, 4, 400).stock(),
        Rule::fixed("Triple 5s", 3, 5, 500).stock(),
        Rule::fixed("Triple 6s", 3, 6, 600).stock(),
        Rule::new(
            "Three Pair",
            vec![Criterion::any(2), Criterion::any(2), Criterion::any(2)],
            1500,
        )
        .stock(),
        Rule::new(
            "Straight",
            (1..=6).map(|f| Criterion::face(1, f)).collect(),
            2000,
        )
        .stock(),
    ]
}

/// Rules with the active flag set, in catalog order.
pub fn active_rules(rules: &[Rule]) -> Vec<Rule> {
    rules.iter().filter(|r| r.active).cloned().collect()
}

/// Checks the invariants a catalog loader should enforce before scoring.
///
/// # Errors
///
/// Returns the first violation found, walking the catalog in order:
/// [`GameError::EmptyCriteria`], [`GameError::ZeroQuantity`],
/// [`GameError::InvalidFace`], [`GameError::DiceCountOverflow`],
/// [`GameError::TotalDiceMismatch`] or [`GameError::DuplicateRuleName`].
///
/// # Examples
///
/// ```
/// use farkle_engine::rules::{default_rules, validate_catalog, Rule};
///
/// assert!(validate_catalog(&default_rules()).is_ok());
///
/// let mut broken = Rule::fixed("Triple 2s", 3, 2, 200);
/// broken.total_dice = 2;
/// assert!(validate_catalog(&[broken]).is_err());
/// ```
pub fn validate_catalog(rules: &[Rule]) -> Result<(), GameError> {
    let mut names = HashSet::new();
    for rule in rules {
        if rule.criteria.is_empty() {
            return Err(GameError::EmptyCriteria {
                name: rule.name.clone(),
            });
        }
        let mut actual = 0u32;
        for c in &rule.criteria {
            if c.quantity == 0 {
                return Err(GameError::ZeroQuantity {
                    name: rule.name.clone(),
                });
            }
            if let Target::Face(v) = c.target {
                if !is_valid_face(v) {
                    return Err(GameError::InvalidFace {
                        face: v.to_string(),
                    });
                }
            }
            actual = actual
                .checked_add(c.quantity)
                .ok_or_else(|| GameError::DiceCountOverflow {
                    name: rule.name.clone(),
                })?;
        }
        if actual != rule.total_dice {
            return Err(GameError::TotalDiceMismatch {
                name: rule.name.clone(),
                declared: rule.total_dice,
                actual,
            });
        }
        if !names.insert(rule.name.as_str()) {
            return Err(GameError::DuplicateRuleName {
                name: rule.name.clone(),
            });
        }
    }
    Ok(())
}
