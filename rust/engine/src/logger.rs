use serde::{Deserialize, Serialize};

use crate::dice::{Face, Roll};
use crate::score::ResolvedCombination;

/// One rule application inside a recorded score.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Name of the matched rule
    pub rule: String,
    /// How many times the rule was applied
    pub multiplier: u32,
    /// Points contributed (rule value times multiplier)
    pub points: u64,
}

/// Complete record of one scored roll.
/// Serialized to JSONL format for score history storage and analysis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique identifier for this roll (format: YYYYMMDD-NNNNNN)
    pub roll_id: String,
    /// RNG seed of the roller that produced the dice, if any
    pub seed: Option<u64>,
    /// Faces in throw order
    pub roll: Roll,
    /// Rule applications in the order they were selected
    pub matches: Vec<MatchRecord>,
    /// Total points scored
    pub points: u64,
    /// Dice that did not score
    pub leftover: usize,
    /// True when no rule applied
    pub bust: bool,
    /// Timestamp when the roll was scored (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl ScoreRecord {
    pub fn from_resolved(
        roll_id: String,
        seed: Option<u64>,
        roll: &[Face],
        resolved: &ResolvedCombination<'_>,
    ) -> Self {
        Self {
            roll_id,
            seed,
            roll: roll.to_vec(),
            matches: resolved
                .matches
                .iter()
                .map(|m| MatchRecord {
                    rule: m.rule.name.clone(),
                    multiplier: m.multiplier,
                    points: m.points(),
                })
                .collect(),
            points: resolved.total_points(),
            leftover: resolved.leftover,
            bust: resolved.is_bust(),
            ts: None,
        }
    }
}

pub fn format_roll_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ScoreLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl ScoreLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; `write` is a no-op.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_roll_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &ScoreRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
