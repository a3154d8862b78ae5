use farkle_engine::errors::GameError;
use farkle_engine::rules::{default_rules, validate_catalog, Rule};
use serde::{Deserialize, Serialize};
use std::fs;

/// Upper bound on dice per throw accepted from configuration
pub const MAX_DICE: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub dice: usize,
    pub seed: Option<u64>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub dice: ValueSource,
    pub seed: ValueSource,
    pub rules: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            dice: ValueSource::Default,
            seed: ValueSource::Default,
            rules: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dice: farkle_engine::dice::DICE_PER_TURN,
            seed: None,
            rules: default_rules(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Catalog(GameError),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
impl From<GameError> for ConfigError {
    fn from(e: GameError) -> Self {
        ConfigError::Catalog(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Catalog(e) => write!(f, "invalid rule catalog: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FARKLE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, &s)?;
    }

    if let Ok(dice) = std::env::var("FARKLE_DICE")
        && !dice.is_empty()
    {
        cfg.dice = dice
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid dice count".into()))?;
        sources.dice = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("FARKLE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    dice: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rules: Option<Vec<Rule>>,
}

fn apply_file(
    cfg: &mut Config,
    sources: &mut ConfigSources,
    contents: &str,
) -> Result<(), ConfigError> {
    let f: FileConfig = toml::from_str(contents)?;
    if let Some(v) = f.dice {
        cfg.dice = v;
        sources.dice = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.rules {
        cfg.rules = v;
        sources.rules = ValueSource::File;
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.dice == 0 || cfg.dice > MAX_DICE {
        return Err(ConfigError::Invalid(format!(
            "dice must be between 1 and {}",
            MAX_DICE
        )));
    }
    if cfg.rules.is_empty() {
        return Err(ConfigError::Invalid(
            "rule catalog is empty".into(),
        ));
    }
    validate_catalog(&cfg.rules)?;
    Ok(())
}
