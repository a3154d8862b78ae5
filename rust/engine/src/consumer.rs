use crate::dice::{Face, Roll};
use crate::rules::{Rule, Target};
use crate::tally::{build_tally, Tally};

/// Removes one application of `rule` from `tally`, in place.
///
/// Criteria are applied in rule order. A wildcard lowers the first entry
/// with enough dice; a fixed face lowers its own entry and may drive it
/// negative. Criteria with no target entry are skipped. The tally belongs
/// to the caller and is consumed by this call; check the rule with
/// [`crate::matcher::matches`] first.
pub fn subtract_in_place(tally: &mut Tally, rule: &Rule) {
    for c in &rule.criteria {
        let target = match c.target {
            Target::Any => tally.first_with_at_least(c.quantity),
            Target::Face(value) => tally.position_of(value),
        };
        if let Some(i) = target {
            tally.decrement(i, c.quantity);
        }
    }
}

/// Dice left in `roll` after `rule` is applied once.
///
/// Assumes the rule applies. If it does not, faces that would go negative
/// are dropped, so dice silently disappear from the result.
///
/// # Examples
///
/// ```
/// use farkle_engine::consumer::remaining_dice;
/// use farkle_engine::rules::Rule;
///
/// let triple_fives = Rule::fixed("Triple 5s", 3, 5, 500);
/// assert_eq!(remaining_dice(&[5, 2, 5, 5, 1], &triple_fives), vec![2, 1]);
/// ```
pub fn remaining_dice(roll: &[Face], rule: &Rule) -> Roll {
    let mut tally = build_tally(roll);
    subtract_in_place(&mut tally, rule);
    tally.into_roll()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Criterion;

    #[test]
    fn wildcard_takes_first_face_with_enough_dice() {
        let pair = Rule::new("Any pair", vec![Criterion::any(2)], 0);
        assert_eq!(remaining_dice(&[3, 5, 5, 3], &pair), vec![5, 5]);
        assert_eq!(remaining_dice(&[5, 3, 5, 3], &pair), vec![3, 3]);
    }

    #[test]
    fn inapplicable_rule_drops_dice() {
        let triple_twos = Rule::fixed("Triple 2s", 3, 2, 200);
        assert_eq!(remaining_dice(&[2, 4, 2], &triple_twos), vec![4]);
    }

    #[test]
    fn subtract_mutates_caller_tally() {
        let mut tally = build_tally(&[1, 1, 5]);
        subtract_in_place(&mut tally, &Rule::fixed("Standard 100", 1, 1, 100));
        assert_eq!(tally.quantity_of(1), 1);
        subtract_in_place(&mut tally, &Rule::fixed("Standard 50", 1, 5, 50));
        assert_eq!(tally.quantity_of(5), 0);
        assert_eq!(tally.into_roll(), vec![1]);
    }

    #[test]
    fn oversized_fixed_criterion_empties_its_face() {
        let rule = Rule::fixed("Wrap", u32::MAX, 1, 100);
        assert_eq!(remaining_dice(&[1, 2, 1], &rule), vec![2]);
    }

    #[test]
    fn missing_face_is_skipped() {
        let mut tally = build_tally(&[2, 3]);
        subtract_in_place(&mut tally, &Rule::fixed("Standard 100", 1, 1, 100));
        assert_eq!(tally.into_roll(), vec![2, 3]);
    }
}
