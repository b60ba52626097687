use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use tracing::{error, info};

use crate::config::PurgeConfig;
use crate::purge;
use crate::runtime::ContainerRuntime;

/// Drive purge cycles per the configured recurrence, evaluated in the
/// configured timezone. Each cycle is awaited to completion before the next
/// occurrence is computed, so cycles never overlap. A failed cycle is logged
/// and leaves later cycles unaffected.
pub async fn run<R: ContainerRuntime + ?Sized>(runtime: &R, config: &PurgeConfig) -> Result<()> {
    loop {
        let now = Utc::now().with_timezone(&config.timezone);
        let next = match next_occurrence(&config.schedule, &now) {
            Some(next) => next,
            None => anyhow::bail!("schedule has no upcoming occurrence"),
        };
        info!("next purge cycle at {}", next);

        let wait = (next - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        if let Err(e) = purge::purge(runtime, config).await {
            error!("purge cycle failed: {:#}", e);
        }
    }
}

fn next_occurrence(schedule: &Schedule, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    schedule.after(after).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn daily_midnight_schedule_fires_at_next_midnight() {
        let schedule = Schedule::from_str("0 0 0 * * *").unwrap();
        let tz = chrono_tz::America::Los_Angeles;
        let now = tz.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap();
        let next = next_occurrence(&schedule, &now).unwrap();
        assert_eq!(next, tz.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn occurrence_is_strictly_after_the_reference_instant() {
        let schedule = Schedule::from_str("0 0 0 * * *").unwrap();
        let tz = chrono_tz::UTC;
        let midnight = tz.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let next = next_occurrence(&schedule, &midnight).unwrap();
        assert_eq!(next, tz.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
    }
}
