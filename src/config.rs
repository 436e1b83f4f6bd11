//! Runtime configuration.
//!
//! Defaults, then environment variables, then command-line flags:
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `TUI_2048_SEED` | `--seed N` | Fixed RNG seed (default: system clock) |
//! | `TUI_2048_LOG_PATH` | `--log PATH` | Append a JSON-lines event log to PATH |
//! | `TUI_2048_POLL_MS` | `--poll-ms N` | Input poll timeout in milliseconds |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

pub const USAGE: &str = "usage: tui-2048 [--seed N] [--log PATH] [--poll-ms N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub poll_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            poll_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    /// Environment, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_args(args)?;
        Ok(config)
    }

    /// Create from environment variables. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let poll_ms = lookup("TUI_2048_POLL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.poll_ms);

        Self {
            seed,
            log_path,
            poll_ms,
        }
    }

    /// Override fields from command-line flags.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let v = flag_value(args, i, "--seed")?;
                    self.seed = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("tui-2048: invalid --seed value: {}", v))?,
                    );
                    i += 1;
                }
                "--log" => {
                    let v = flag_value(args, i, "--log")?;
                    self.log_path = Some(v.to_string());
                    i += 1;
                }
                "--poll-ms" => {
                    let v = flag_value(args, i, "--poll-ms")?;
                    let ms = v
                        .parse::<u32>()
                        .ok()
                        .filter(|&ms| ms > 0)
                        .ok_or_else(|| anyhow!("tui-2048: invalid --poll-ms value: {}", v))?;
                    self.poll_ms = ms;
                    i += 1;
                }
                other => {
                    return Err(anyhow!("tui-2048: unknown argument: {}\n{}", other, USAGE));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("tui-2048: missing value for {}", flag))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
