use chrono::Duration;
use chrono_tz::Tz;
use cron::Schedule;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

use crate::cli::Cli;
use crate::purge::NameFilter;

/// Errors detected while validating the configuration at startup. These are
/// fatal to the whole process, never per-cycle.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {which} pattern '{pattern}'")]
    Pattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid schedule '{schedule}'")]
    Schedule {
        schedule: String,
        #[source]
        source: cron::error::Error,
    },

    #[error("unknown timezone '{0}'")]
    Timezone(String),
}

/// Immutable settings for purge cycles, built once from the CLI surface.
#[derive(Debug, Clone)]
pub struct PurgeConfig {
    pub age_threshold: Duration,
    pub run_now: bool,
    pub schedule: Schedule,
    pub timezone: Tz,
    pub swarm: bool,
    pub filter: NameFilter,
}

impl PurgeConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let schedule =
            Schedule::from_str(&cli.schedule).map_err(|source| ConfigError::Schedule {
                schedule: cli.schedule.clone(),
                source,
            })?;

        let timezone: Tz = cli
            .timezone
            .parse()
            .map_err(|_| ConfigError::Timezone(cli.timezone.clone()))?;

        let include = compile_pattern("include", cli.include.as_deref())?;
        let exclude = compile_pattern("exclude", cli.exclude.as_deref())?;

        Ok(Self {
            age_threshold: Duration::days(i64::from(cli.days)),
            run_now: cli.run_now,
            schedule,
            timezone,
            swarm: cli.swarm,
            filter: NameFilter::new(include, exclude),
        })
    }
}

fn compile_pattern(
    which: &'static str,
    pattern: Option<&str>,
) -> Result<Option<Regex>, ConfigError> {
    match pattern {
        Some(p) => Regex::new(p).map(Some).map_err(|source| ConfigError::Pattern {
            which,
            pattern: p.to_string(),
            source,
        }),
        None => Ok(None),
    }
}
