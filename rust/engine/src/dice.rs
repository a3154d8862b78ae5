use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::GameError;

/// Face value of a single six-sided die (1 through 6).
/// Dice carry no identity beyond their value.
pub type Face = u8;

/// A throw of dice in the order the game produced them.
pub type Roll = Vec<Face>;

/// Lowest face on a die
pub const MIN_FACE: Face = 1;
/// Highest face on a die
pub const MAX_FACE: Face = 6;
/// Number of dice thrown at the start of a turn
pub const DICE_PER_TURN: usize = 6;

pub fn is_valid_face(face: Face) -> bool {
    (MIN_FACE..=MAX_FACE).contains(&face)
}

pub fn all_faces() -> [Face; 6] {
    [1, 2, 3, 4, 5, 6]
}

/// Deterministic dice thrower backed by ChaCha20.
///
/// The same seed always yields the same sequence of rolls, which keeps
/// simulations and recorded score logs reproducible.
#[derive(Debug)]
pub struct DiceRoller {
    rng: ChaCha20Rng,
    thrown: u64,
}

impl DiceRoller {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            thrown: 0,
        }
    }

    /// Throws `count` dice and returns their faces in throw order.
    pub fn roll(&mut self, count: usize) -> Roll {
        self.thrown += count as u64;
        (0..count)
            .map(|_| self.rng.random_range(MIN_FACE..=MAX_FACE))
            .collect()
    }

    pub fn dice_thrown(&self) -> u64 {
        self.thrown
    }
}

/// Parses a roll written as faces separated by commas and/or whitespace.
///
/// Brackets are tolerated so that the output of [`format_roll`] parses back.
///
/// # Errors
///
/// - [`GameError::EmptyRoll`] when no faces are present
/// - [`GameError::InvalidFace`] when a token is not a face in 1..=6
///
/// # Examples
///
/// ```
/// use farkle_engine::dice::parse_roll;
///
/// assert_eq!(parse_roll("1, 5 5").unwrap(), vec![1, 5, 5]);
/// assert!(parse_roll("1 7").is_err());
/// ```
pub fn parse_roll(input: &str) -> Result<Roll, GameError> {
    let roll = input
        .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(parse_face)
        .collect::<Result<Roll, _>>()?;
    if roll.is_empty() {
        return Err(GameError::EmptyRoll);
    }
    Ok(roll)
}

pub fn parse_face(token: &str) -> Result<Face, GameError> {
    match token.parse::<Face>() {
        Ok(face) if is_valid_face(face) => Ok(face),
        _ => Err(GameError::InvalidFace {
            face: token.to_string(),
        }),
    }
}

pub fn format_roll(roll: &[Face]) -> String {
    let faces: Vec<String> = roll.iter().map(|f| f.to_string()).collect();
    format!("[{}]", faces.join(", "))
}
