use crate::dice::{Face, Roll};

/// Remaining count of one face value.
///
/// The count is signed: subtracting more dice than a face holds leaves a
/// negative count, which callers read as "the rule does not fit".
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TallyEntry {
    pub value: Face,
    pub quantity: i32,
}

/// Frequency table of a roll, one entry per distinct face.
///
/// Entries stay in order of first appearance in the roll. Wildcard criteria
/// claim the first entry with enough dice, so this order decides which face
/// absorbs them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

/// Builds the tally of `roll` in a single pass.
///
/// # Examples
///
/// ```
/// use farkle_engine::tally::build_tally;
///
/// let tally = build_tally(&[5, 1, 5]);
/// let counts: Vec<(u8, i32)> = tally.entries().iter().map(|e| (e.value, e.quantity)).collect();
/// assert_eq!(counts, vec![(5, 2), (1, 1)]);
/// ```
pub fn build_tally(roll: &[Face]) -> Tally {
    let mut tally = Tally::default();
    for &die in roll {
        match tally.position_of(die) {
            Some(i) => tally.entries[i].quantity += 1,
            None => tally.entries.push(TallyEntry {
                value: die,
                quantity: 1,
            }),
        }
    }
    tally
}

impl Tally {
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn position_of(&self, value: Face) -> Option<usize> {
        self.entries.iter().position(|e| e.value == value)
    }

    /// Index of the first entry holding at least `quantity` dice.
    pub fn first_with_at_least(&self, quantity: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| i64::from(e.quantity) >= i64::from(quantity))
    }

    pub fn quantity_of(&self, value: Face) -> i32 {
        self.position_of(value)
            .map(|i| self.entries[i].quantity)
            .unwrap_or(0)
    }

    /// Lowers the entry at `index` by `by` and returns the new count.
    ///
    /// Counts bottom out at `i32::MIN`, so any quantity a rule can declare
    /// leaves the entry negative rather than wrapping.
    pub(crate) fn decrement(&mut self, index: usize, by: u32) -> i32 {
        let entry = &mut self.entries[index];
        let lowered = i64::from(entry.quantity) - i64::from(by);
        entry.quantity = i32::try_from(lowered).unwrap_or(i32::MIN);
        entry.quantity
    }

    /// Dice still counted, ignoring entries that went negative.
    pub fn dice_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.quantity.max(0) as usize)
            .sum()
    }

    /// Expands the tally back into a roll, entry by entry.
    ///
    /// Entries with a non-positive count contribute no dice.
    pub fn into_roll(self) -> Roll {
        let mut roll = Vec::with_capacity(self.dice_count());
        for e in self.entries {
            for _ in 0..e.quantity.max(0) {
                roll.push(e.value);
            }
        }
        roll
    }
}
