//! # farkle-engine: Farkle Dice Scoring Core
//!
//! Scores a throw of six-sided dice against a catalog of combination rules
//! ("three of a kind", "straight", "three pairs", ...). Scoring is a pure
//! computation: every call builds its own working data and nothing is kept
//! between calls.
//!
//! ## Core Modules
//!
//! - [`dice`] - Face and roll types, seeded dice roller, roll parsing
//! - [`rules`] - Criteria, rules, the stock catalog and catalog validation
//! - [`tally`] - Insertion-ordered frequency table of a roll
//! - [`matcher`] - Whether a roll satisfies a rule's criteria
//! - [`consumer`] - Dice left after applying a rule once
//! - [`search`] - Greedy decomposition of a roll into rule matches
//! - [`score`] - Point totals and leftover dice
//! - [`logger`] - ScoreRecord serialization to JSONL
//! - [`errors`] - Error types for parsing and catalog validation
//!
//! ## Quick Start
//!
//! ```rust
//! use farkle_engine::rules::default_rules;
//! use farkle_engine::score::resolve;
//!
//! let rules = default_rules();
//! let resolved = resolve(&[1, 1, 1, 5, 2, 3], &rules);
//!
//! assert_eq!(resolved.total_points(), 1050);
//! assert_eq!(resolved.leftover, 2);
//! ```
//!
//! ## Deterministic Rolls
//!
//! ```rust
//! use farkle_engine::dice::DiceRoller;
//!
//! let mut a = DiceRoller::new_with_seed(42);
//! let mut b = DiceRoller::new_with_seed(42);
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

pub mod consumer;
pub mod dice;
pub mod errors;
pub mod logger;
pub mod matcher;
pub mod rules;
pub mod score;
pub mod search;
pub mod tally;
