use crate::ballot::Channel;
use crate::consts::*;
use crate::error::{VbResult, VoteBarError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::debug;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub rules: ScoringRules,
    #[command(flatten)]
    pub display: DisplayParams,
}

/// Per-channel constants of the logarithmic score formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRules {
    pub ceiling: u32,
    pub floor: f64,
    pub spread: f64,
}

impl ChannelRules {
    /// Highest sub-score a group can reach on this channel.
    pub fn max_score(&self) -> f64 {
        self.floor + self.spread
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringRules {
    // === JURY ===
    #[arg(long, default_value_t = JURY_CEILING)]
    pub jury_ceiling: u32,
    #[arg(long, default_value_t = JURY_FLOOR)]
    pub jury_floor: f64,
    #[arg(long, default_value_t = JURY_SPREAD)]
    pub jury_spread: f64,

    // === AUDIENCE ===
    #[arg(long, default_value_t = AUDIENCE_CEILING)]
    pub audience_ceiling: u32,
    #[arg(long, default_value_t = AUDIENCE_FLOOR)]
    pub audience_floor: f64,
    #[arg(long, default_value_t = AUDIENCE_SPREAD)]
    pub audience_spread: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            jury_ceiling: JURY_CEILING,
            jury_floor: JURY_FLOOR,
            jury_spread: JURY_SPREAD,
            audience_ceiling: AUDIENCE_CEILING,
            audience_floor: AUDIENCE_FLOOR,
            audience_spread: AUDIENCE_SPREAD,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayParams {
    #[arg(long, default_value = DEFAULT_LABEL_PREFIX)]
    pub label_prefix: String,
    #[arg(
        long,
        default_value_t = DEFAULT_PRECISION,
        value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64)
    )]
    pub precision: u32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DisplayParams {
    /// Positional label, 1-based.
    pub fn label_for(&self, position: usize) -> String {
        format!("{} {}", self.label_prefix, position + 1)
    }

    pub fn validate(&self) -> VbResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(VoteBarError::Config(format!(
                "precision must be between 0 and {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }
}

impl ScoringRules {
    pub fn channel(&self, channel: Channel) -> ChannelRules {
        match channel {
            Channel::Jury => ChannelRules {
                ceiling: self.jury_ceiling,
                floor: self.jury_floor,
                spread: self.jury_spread,
            },
            Channel::Audience => ChannelRules {
                ceiling: self.audience_ceiling,
                floor: self.audience_floor,
                spread: self.audience_spread,
            },
        }
    }

    pub fn validate(&self) -> VbResult<()> {
        for channel in Channel::iter() {
            let r = self.channel(channel);
            if r.ceiling == 0 {
                return Err(VoteBarError::Config(format!(
                    "{} ceiling must be positive",
                    channel
                )));
            }
            if !r.floor.is_finite() || r.floor < 0.0 {
                return Err(VoteBarError::Config(format!(
                    "{} floor must be a non-negative number, got {}",
                    channel, r.floor
                )));
            }
            if !r.spread.is_finite() || r.spread < 0.0 {
                return Err(VoteBarError::Config(format!(
                    "{} spread must be a non-negative number, got {}",
                    channel, r.spread
                )));
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VbResult<Self> {
        Ok(Config::load_from_file(path)?.rules)
    }

    /// Copies every rule the user passed explicitly on the command line
    /// over `self`, leaving file-provided values alone otherwise.
    pub fn merge_from_cli(&mut self, cli_rules: &ScoringRules, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    debug!("CLI override: {} = {:?}", stringify!($field), cli_rules.$field);
                    self.$field = cli_rules.$field;
                }
            };
        }

        update_if_present!(jury_ceiling);
        update_if_present!(jury_floor);
        update_if_present!(jury_spread);
        update_if_present!(audience_ceiling);
        update_if_present!(audience_floor);
        update_if_present!(audience_spread);
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VbResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&content)?;
        config.rules.validate()?;
        config.display.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_ballot_constants() {
        let rules = ScoringRules::default();
        let jury = rules.channel(Channel::Jury);
        assert_eq!(jury.ceiling, 70);
        assert_eq!(jury.max_score(), 70.0);
        let audience = rules.channel(Channel::Audience);
        assert_eq!(audience.ceiling, 120);
        assert_eq!(audience.max_score(), 30.0);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn zero_ceiling_is_rejected() {
        let rules = ScoringRules {
            audience_ceiling: 0,
            ..Default::default()
        };
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("Audience ceiling"));
    }

    #[test]
    fn precision_beyond_limit_is_rejected() {
        let display = DisplayParams {
            precision: MAX_PRECISION + 1,
            ..Default::default()
        };
        assert!(matches!(display.validate(), Err(VoteBarError::Config(_))));
        assert!(DisplayParams::default().validate().is_ok());
    }

    #[test]
    fn labels_are_one_based() {
        let display = DisplayParams::default();
        assert_eq!(display.label_for(0), "Group 1");
        assert_eq!(display.label_for(2), "Group 3");
    }
}
