//! Configuration for daily puzzle selection.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Parameters that define the daily schedule.
///
/// Changing any of these changes every assignment, so a deployed schedule
/// must keep them fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct DailyConfig {
    /// Day #1 of the schedule.
    pub epoch: NaiveDate,

    /// Seed of cycle 0 of the station schedule. Cycle `k` uses `base_seed + k`.
    pub base_seed: u32,

    /// Seed for route pairs. Day `d` uses `route_seed + d`.
    pub route_seed: u32,

    /// How many origin/destination draws to try before giving up on a day.
    pub max_route_rolls: usize,

    /// Civil timezone in which "today" is determined.
    pub timezone: FixedOffset,
}

impl DailyConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        epoch: NaiveDate,
        base_seed: u32,
        route_seed: u32,
        max_route_rolls: usize,
        timezone: FixedOffset,
    ) -> Self {
        Self {
            epoch,
            base_seed,
            route_seed,
            max_route_rolls,
            timezone,
        }
    }

    /// The civil date at instant `now` in the configured timezone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid epoch"),
            base_seed: 12345,
            route_seed: 54321,
            max_route_rolls: 1000,
            // Europe/Madrid standard time
            timezone: FixedOffset::east_opt(3600).expect("offset within a day"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_config() {
        let config = DailyConfig::default();

        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(config.base_seed, 12345);
        assert_eq!(config.route_seed, 54321);
        assert_eq!(config.max_route_rolls, 1000);
        assert_eq!(config.timezone.local_minus_utc(), 3600);
    }

    #[test]
    fn custom_config() {
        let epoch = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let tz = FixedOffset::east_opt(0).unwrap();
        let config = DailyConfig::new(epoch, 1, 2, 10, tz);

        assert_eq!(config.epoch, epoch);
        assert_eq!(config.base_seed, 1);
        assert_eq!(config.route_seed, 2);
        assert_eq!(config.max_route_rolls, 10);
    }

    #[test]
    fn today_rolls_over_at_local_midnight() {
        let config = DailyConfig::default();

        // 23:30 UTC is already 00:30 the next day at +01:00
        let late = Utc.with_ymd_and_hms(2026, 3, 14, 23, 30, 0).unwrap();
        assert_eq!(config.today(late), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());

        let early = Utc.with_ymd_and_hms(2026, 3, 14, 22, 59, 0).unwrap();
        assert_eq!(config.today(early), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }
}
