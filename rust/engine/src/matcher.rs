use crate::dice::Face;
use crate::rules::{Criterion, Rule, Target};
use crate::tally::build_tally;

/// Returns whether `roll` satisfies every criterion of `rule`.
///
/// Works on a private tally, so the caller's roll is never touched.
/// Fixed-face criteria are checked first, in rule order. Wildcards are then
/// tried largest quantity first, each claiming the first face (in order of
/// first appearance) that still has enough dice; a larger wildcard would
/// otherwise lose its only candidate face to a smaller one.
///
/// # Examples
///
/// ```
/// use farkle_engine::matcher::matches;
/// use farkle_engine::rules::{Criterion, Rule};
///
/// let three_pair = Rule::new(
///     "Three Pair",
///     vec![Criterion::any(2), Criterion::any(2), Criterion::any(2)],
///     1500,
/// );
/// assert!(matches(&[2, 2, 3, 3, 5, 5], &three_pair));
/// assert!(!matches(&[2, 2, 2, 3, 5, 5], &three_pair));
/// ```
pub fn matches(roll: &[Face], rule: &Rule) -> bool {
    let mut tally = build_tally(roll);
    let mut ok = true;

    let mut wildcards: Vec<&Criterion> = rule
        .criteria
        .iter()
        .filter(|c| c.target.is_wildcard())
        .collect();
    // stable: equal quantities keep rule order
    wildcards.sort_by(|a, b| b.quantity.cmp(&a.quantity));

    for c in &rule.criteria {
        let Target::Face(value) = c.target else {
            continue;
        };
        match tally.position_of(value) {
            Some(i) => {
                if tally.decrement(i, c.quantity) < 0 {
                    ok = false;
                }
            }
            None => ok = false,
        }
    }

    for c in wildcards {
        match tally.first_with_at_least(c.quantity) {
            Some(i) => {
                tally.decrement(i, c.quantity);
            }
            None => ok = false,
        }
    }

    ok
}

/// Rules from `rules` that fit in `roll.len()` dice and match, in catalog order.
pub fn applicable_rules<'r>(roll: &[Face], rules: &'r [Rule]) -> Vec<&'r Rule> {
    rules
        .iter()
        .filter(|r| roll.len() >= r.total_dice as usize && matches(roll, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    #[test]
    fn fixed_face_needs_enough_dice() {
        let triple_ones = Rule::fixed("Triple 1s", 3, 1, 1000);
        assert!(matches(&[1, 1, 1], &triple_ones));
        assert!(matches(&[4, 1, 2, 1, 1], &triple_ones));
        assert!(!matches(&[1, 1, 5], &triple_ones));
        assert!(!matches(&[], &triple_ones));
    }

    #[test]
    fn larger_wildcard_claims_first() {
        // In rule order the pair would take two of the 6s and leave no face
        // with four dice.
        let rule = Rule::new("Four and a pair", vec![Criterion::any(2), Criterion::any(4)], 1500);
        assert!(matches(&[6, 6, 6, 6, 2, 2], &rule));
        assert!(matches(&[2, 2, 6, 6, 6, 6], &rule));
        assert!(!matches(&[6, 6, 6, 3, 2, 2], &rule));
    }

    #[test]
    fn mixed_fixed_and_wildcard() {
        // One 1 plus a triple of anything: the 1 is removed before the wildcard looks.
        let rule = Rule::new("Ace and triple", vec![Criterion::face(1, 1), Criterion::any(3)], 700);
        assert!(matches(&[1, 4, 4, 4], &rule));
        assert!(matches(&[1, 1, 1, 1], &rule));
        assert!(!matches(&[1, 1, 1], &rule));
    }

    #[test]
    fn applicable_set_respects_dice_count_and_order() {
        let rules = default_rules();
        let names: Vec<&str> = applicable_rules(&[1, 1, 1, 5], &rules)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Standard 100", "Standard 50", "Triple 1s"]);
        assert!(applicable_rules(&[2, 3, 4], &rules).is_empty());
    }

    #[test]
    fn quantities_beyond_the_roll_never_match() {
        let ones = Rule::new("Wrap", vec![Criterion::face(u32::MAX, 1)], 100);
        assert!(!matches(&[1], &ones));
        let any = Rule::new("Wrap any", vec![Criterion::any(u32::MAX)], 100);
        assert!(!matches(&[1, 1], &any));
        let big = Rule::new("Big", vec![Criterion::face(i32::MAX as u32 + 1, 1)], 100);
        assert!(!matches(&[1, 1, 1], &big));
    }
}
