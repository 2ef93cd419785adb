//! Run configuration for the autoplay binary.
//!
//! Values come from environment variables first, then command-line flags override
//! them:
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `PERFECT_FIT_SEED` | `--seed` | 1 |
//! | `PERFECT_FIT_GAMES` | `--games` | 1 |
//! | `PERFECT_FIT_MAX_TURNS` | `--max-turns` | 10000 |
//! | `PERFECT_FIT_OBSERVE` | `--observe` | off |

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub games: u32,
    /// Turn cap per game; a game that reaches it ends without game over.
    pub max_turns: u32,
    /// Emit an observation line after every turn.
    pub observe: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            max_turns: 10_000,
            observe: false,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (environment, test maps)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("PERFECT_FIT_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let games = lookup("PERFECT_FIT_GAMES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.games);
        let max_turns = lookup("PERFECT_FIT_MAX_TURNS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_turns);
        let observe = lookup("PERFECT_FIT_OBSERVE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.observe);

        Self {
            seed,
            games,
            max_turns,
            observe,
        }
    }

    /// Apply command-line flags on top of this config
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    self.seed = parse_value(args, &mut i, "--seed")?;
                }
                "--games" => {
                    self.games = parse_value(args, &mut i, "--games")?;
                }
                "--max-turns" => {
                    self.max_turns = parse_value(args, &mut i, "--max-turns")?;
                }
                "--observe" => {
                    self.observe = true;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        if self.games == 0 {
            return Err(anyhow!("--games must be at least 1"));
        }
        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
