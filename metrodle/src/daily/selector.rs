//! Deterministic assignment of puzzles to calendar dates.
//!
//! The station schedule walks through one seeded permutation of the whole
//! catalog per cycle of `N` days (`N` = catalog size), so every station is
//! the answer exactly once per cycle. Each cycle reseeds the shuffle, so
//! consecutive cycles come out in different orders.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::config::DailyConfig;
use super::prng::Mulberry32;
use crate::catalog::Catalog;
use crate::domain::Station;

/// Error from route assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DailyError {
    /// The catalog is too small to pick two distinct stations
    #[error("catalog needs at least two stations for a route, has {0}")]
    TooFewStations(usize),

    /// No valid origin/destination pair was drawn
    #[error("no valid route found for {date} after {rolls} draws")]
    NoRoute { date: NaiveDate, rolls: usize },
}

/// The station assigned to one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAssignment {
    pub date: NaiveDate,
    /// Display number; the epoch is day 1.
    pub day_number: i64,
    pub station: Station,
}

/// The origin/destination pair assigned to one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRoute {
    pub date: NaiveDate,
    pub day_number: i64,
    pub origin: Station,
    pub destination: Station,
}

/// Computes daily assignments for a catalog.
#[derive(Debug, Clone)]
pub struct DailySelector<'a> {
    catalog: &'a Catalog,
    config: DailyConfig,
}

impl<'a> DailySelector<'a> {
    /// Create a selector over a catalog.
    pub fn new(catalog: &'a Catalog, config: DailyConfig) -> Self {
        Self { catalog, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &DailyConfig {
        &self.config
    }

    /// Whole days from the epoch to `date`; negative before the epoch.
    pub fn days_since_epoch(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.config.epoch).num_days()
    }

    /// Display number for `date`.
    pub fn day_number(&self, date: NaiveDate) -> i64 {
        self.days_since_epoch(date) + 1
    }

    /// The station permutation used for cycle `cycle_number`.
    pub fn cycle(&self, cycle_number: i64) -> Vec<&'a Station> {
        let seed = self.config.base_seed.wrapping_add(cycle_number as u32);
        let mut order: Vec<&Station> = self.catalog.stations().iter().collect();
        Mulberry32::new(seed).shuffle(&mut order);
        order
    }

    /// The station of the day.
    pub fn assign(&self, date: NaiveDate) -> DailyAssignment {
        let days = self.days_since_epoch(date);
        let n = self.catalog.len() as i64;
        let cycle_number = days.div_euclid(n);
        let index_in_cycle = days.rem_euclid(n) as usize;

        let station = self.cycle(cycle_number)[index_in_cycle].clone();
        debug!(
            %date,
            cycle = cycle_number,
            index = index_in_cycle,
            station = %station.id,
            "assigned daily station"
        );

        DailyAssignment {
            date,
            day_number: days + 1,
            station,
        }
    }

    /// The route of the day.
    ///
    /// Draws origin/destination pairs from a generator seeded with the day,
    /// re-rolling until the two stations are distinct, share no line and
    /// are connected in the network.
    pub fn assign_route(&self, date: NaiveDate) -> Result<DailyRoute, DailyError> {
        let stations = self.catalog.stations();
        let n = stations.len();
        if n < 2 {
            return Err(DailyError::TooFewStations(n));
        }

        let days = self.days_since_epoch(date);
        let mut rng = Mulberry32::new(self.config.route_seed.wrapping_add(days as u32));
        let network = self.catalog.network();

        for roll in 0..self.config.max_route_rolls {
            let i = rng.gen_range(0..n);
            let mut j = rng.gen_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            let (origin, destination) = (&stations[i], &stations[j]);

            let shares_line = origin.lines.iter().any(|l| destination.serves(l));
            if shares_line || network.path(&origin.id, &destination.id).is_none() {
                continue;
            }

            debug!(
                %date,
                rolls = roll + 1,
                origin = %origin.id,
                destination = %destination.id,
                "assigned daily route"
            );
            return Ok(DailyRoute {
                date,
                day_number: days + 1,
                origin: origin.clone(),
                destination: destination.clone(),
            });
        }

        warn!(%date, rolls = self.config.max_route_rolls, "no valid route");
        Err(DailyError::NoRoute {
            date,
            rolls: self.config.max_route_rolls,
        })
    }

    /// Station assignments for every date in `from..=to`.
    pub fn schedule(&self, from: NaiveDate, to: NaiveDate) -> Vec<DailyAssignment> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| self.assign(d))
            .collect()
    }

    /// Route assignments for every date in `from..=to`.
    pub fn route_schedule(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyRoute>, DailyError> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| self.assign_route(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{catalog, station};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_one() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        assert_eq!(selector.days_since_epoch(date(2026, 1, 1)), 0);
        assert_eq!(selector.day_number(date(2026, 1, 1)), 1);
        assert_eq!(selector.day_number(date(2026, 2, 1)), 32);
        assert_eq!(selector.day_number(date(2025, 12, 31)), 0);
    }

    #[test]
    fn matches_reference_schedule() {
        // Fixture order a1 a2 a3 x a5 b1 b3 y c1 c3, 10 stations per cycle.
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());

        assert_eq!(selector.assign(date(2026, 1, 1)).station.id.as_str(), "b3");
        assert_eq!(selector.assign(date(2026, 1, 4)).station.id.as_str(), "a1");
        // Cycle 1 (seed 12346) starts on day 11.
        assert_eq!(selector.assign(date(2026, 1, 11)).station.id.as_str(), "a1");
        // Cycle -1 (seed 12344), last index.
        assert_eq!(selector.assign(date(2025, 12, 31)).station.id.as_str(), "b1");
    }

    #[test]
    fn assignment_is_deterministic() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        let d = date(2026, 5, 17);
        assert_eq!(selector.assign(d), selector.assign(d));
        assert_eq!(selector.assign_route(d), selector.assign_route(d));
    }

    #[test]
    fn every_station_once_per_cycle() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        let start = date(2026, 1, 1) + chrono::Duration::days(cat.len() as i64 * 3);
        let end = start + chrono::Duration::days(cat.len() as i64 - 1);

        let ids: HashSet<_> = selector
            .schedule(start, end)
            .into_iter()
            .map(|a| a.station.id)
            .collect();
        assert_eq!(ids.len(), cat.len());
    }

    #[test]
    fn cycles_differ() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        let ids = |c| -> Vec<String> {
            selector
                .cycle(c)
                .iter()
                .map(|s| s.id.to_string())
                .collect()
        };
        assert_ne!(ids(0), ids(1));
        assert_ne!(ids(-1), ids(0));
    }

    #[test]
    fn route_endpoints_share_no_line() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        for route in selector
            .route_schedule(date(2026, 1, 1), date(2026, 3, 1))
            .unwrap()
        {
            assert_ne!(route.origin.id, route.destination.id);
            assert!(!route.origin.lines.iter().any(|l| route.destination.serves(l)));
            assert!(cat.route(&route.origin.id, &route.destination.id).is_some());
        }
    }

    #[test]
    fn route_needs_two_stations() {
        let cat = Catalog::new(vec![station("only", &[("L1", 1)])], vec![]).unwrap();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        assert_eq!(
            selector.assign_route(date(2026, 1, 1)),
            Err(DailyError::TooFewStations(1))
        );
    }

    #[test]
    fn single_line_catalog_has_no_route() {
        let cat = Catalog::new(
            vec![station("a", &[("L1", 1)]), station("b", &[("L1", 2)])],
            vec![],
        )
        .unwrap();
        let mut config = DailyConfig::default();
        config.max_route_rolls = 20;
        let selector = DailySelector::new(&cat, config);
        assert_eq!(
            selector.assign_route(date(2026, 1, 1)),
            Err(DailyError::NoRoute {
                date: date(2026, 1, 1),
                rolls: 20
            })
        );
    }

    #[test]
    fn schedule_covers_inclusive_range() {
        let cat = catalog();
        let selector = DailySelector::new(&cat, DailyConfig::default());
        let days = selector.schedule(date(2026, 2, 1), date(2026, 2, 28));
        assert_eq!(days.len(), 28);
        assert_eq!(days[0].day_number, 32);
        assert!(selector.schedule(date(2026, 2, 2), date(2026, 2, 1)).is_empty());
    }
}
