use crate::dice::Face;
use crate::rules::Rule;
use crate::search::{evaluate_points, RuleMatch};

/// Points earned by a set of matches; zero when there are none.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub fn total_points(matches: &[RuleMatch<'_>]) -> u64 {
    matches
        .iter()
        .map(RuleMatch::points)
        .fold(0u64, u64::saturating_add)
}

/// Dice of `roll` not consumed by `matches`.
///
/// Saturates at zero when the matches claim more dice than the roll holds,
/// which only happens for matches not produced from this roll.
pub fn leftover_dice(roll: &[Face], matches: &[RuleMatch<'_>]) -> usize {
    let used = matches
        .iter()
        .map(RuleMatch::dice_used)
        .fold(0u64, u64::saturating_add);
    let used = usize::try_from(used).unwrap_or(usize::MAX);
    roll.len().saturating_sub(used)
}

/// Outcome of one scoring pass over a roll.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedCombination<'r> {
    pub matches: Vec<RuleMatch<'r>>,
    pub leftover: usize,
}

impl ResolvedCombination<'_> {
    pub fn total_points(&self) -> u64 {
        total_points(&self.matches)
    }

    /// True when nothing in the roll scored.
    pub fn is_bust(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Scores `roll` against `rules` and counts the unscored dice.
///
/// # Examples
///
/// ```
/// use farkle_engine::rules::default_rules;
/// use farkle_engine::score::resolve;
///
/// let rules = default_rules();
/// let resolved = resolve(&[2, 3, 4], &rules);
/// assert!(resolved.is_bust());
/// assert_eq!(resolved.total_points(), 0);
/// assert_eq!(resolved.leftover, 3);
/// ```
pub fn resolve<'r>(roll: &[Face], rules: &'r [Rule]) -> ResolvedCombination<'r> {
    let matches = evaluate_points(roll, rules);
    let leftover = leftover_dice(roll, &matches);
    ResolvedCombination { matches, leftover }
}
