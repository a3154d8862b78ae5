use tracing::{debug, trace};

use crate::consumer::remaining_dice;
use crate::dice::Face;
use crate::matcher::applicable_rules;
use crate::rules::Rule;

/// A catalog rule applied `multiplier` times to disjoint groups of dice.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RuleMatch<'r> {
    pub rule: &'r Rule,
    pub multiplier: u32,
}

impl<'r> RuleMatch<'r> {
    pub fn new(rule: &'r Rule) -> Self {
        Self {
            rule,
            multiplier: 1,
        }
    }

    /// Points for every application of the rule. Computed in `u64`, where
    /// a `u32` value times a `u32` multiplier cannot overflow.
    pub fn points(&self) -> u64 {
        u64::from(self.rule.point_value) * u64::from(self.multiplier)
    }

    pub fn dice_used(&self) -> u64 {
        u64::from(self.rule.total_dice) * u64::from(self.multiplier)
    }
}

/// Splits `roll` into scoring rule applications, greedily.
///
/// At every step the applicable rule with the strictly highest point value
/// is taken (the earliest in `rules` wins a tie), its dice are removed, and
/// the whole catalog is matched again against what is left. Repeats of a
/// rule fold into one match with a higher multiplier. The result is empty
/// when nothing in the roll scores.
///
/// The greedy choice is not guaranteed to give the best possible total.
///
/// # Examples
///
/// ```
/// use farkle_engine::rules::default_rules;
/// use farkle_engine::search::evaluate_points;
///
/// let rules = default_rules();
/// let matches = evaluate_points(&[1, 1, 1, 1, 1, 1], &rules);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].rule.name, "Triple 1s");
/// assert_eq!(matches[0].multiplier, 2);
/// ```
pub fn evaluate_points<'r>(roll: &[Face], rules: &'r [Rule]) -> Vec<RuleMatch<'r>> {
    let applicable = applicable_rules(roll, rules);
    if applicable.is_empty() {
        debug!(?roll, "no scoring dice");
        return Vec::new();
    }
    let mut best = Vec::new();
    select_best(roll, rules, &applicable, &mut best, roll.len());
    best
}

// Every rule consumes at least one die, so `steps_left` only guards
// against catalogs holding rules with no criteria.
fn select_best<'r>(
    roll: &[Face],
    rules: &'r [Rule],
    applicable: &[&'r Rule],
    best: &mut Vec<RuleMatch<'r>>,
    steps_left: usize,
) {
    let Some(top) = highest_point_rule(applicable) else {
        return;
    };

    match best.iter_mut().find(|m| m.rule.name == top.name) {
        Some(m) => m.multiplier += 1,
        None => best.push(RuleMatch::new(top)),
    }

    let remaining = remaining_dice(roll, top);
    debug!(
        rule = %top.name,
        points = top.point_value,
        remaining = ?remaining,
        "selected rule"
    );
    if remaining.is_empty() || steps_left <= 1 {
        return;
    }

    let next = applicable_rules(&remaining, rules);
    trace!(
        applicable = ?next.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "rematched catalog"
    );
    select_best(&remaining, rules, &next, best, steps_left - 1);
}

/// First rule holding the strictly highest point value.
pub fn highest_point_rule<'r>(rules: &[&'r Rule]) -> Option<&'r Rule> {
    let mut top: Option<&'r Rule> = None;
    for &rule in rules {
        match top {
            Some(t) if rule.point_value <= t.point_value => {}
            _ => top = Some(rule),
        }
    }
    top
}
