use crate::models::{Trip, TripTable, weekday_name};
use ahash::AHashMap;
use std::hash::Hash;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The value with the highest count, paired with that count.
///
/// Ties go to the value that appears first in iteration order. `None` for empty input.
pub fn most_common<K, I>(values: I) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    // value -> (count, index of first appearance)
    let mut seen: AHashMap<K, (usize, usize)> = AHashMap::new();
    for (i, v) in values.into_iter().enumerate() {
        seen.entry(v).or_insert((0, i)).0 += 1;
    }
    seen.into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(k, (count, _))| (k, count))
}

/// Distinct values and their counts, most frequent first; ties keep first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: AHashMap<&'a str, usize> = AHashMap::new();
    for v in values {
        match index.get(v) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(v, order.len());
                order.push((v.to_string(), 1));
            }
        }
    }
    // stable sort preserves first-seen order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<String>,
    pub weekday: Option<String>,
    pub start_hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = table.trips();
    TimeStats {
        month: most_common(trips.iter().map(|t| t.month().name())).map(|(m, _)| m.to_string()),
        weekday: most_common(trips.iter().map(|t| weekday_name(t.weekday())))
            .map(|(d, _)| d.to_string()),
        start_hour: most_common(trips.iter().map(Trip::start_hour)).map(|(h, _)| h),
    }
}

/// Most frequent start station, end station and (start, end) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<(String, String)>,
}

/// Rows with a blank station are left out of the counts that involve it.
pub fn station_stats(table: &TripTable) -> StationStats {
    let trips = table.trips();
    StationStats {
        start_station: most_common(trips.iter().filter_map(|t| t.start_station.as_deref()))
            .map(|(s, _)| s.to_string()),
        end_station: most_common(trips.iter().filter_map(|t| t.end_station.as_deref()))
            .map(|(s, _)| s.to_string()),
        trip: most_common(
            trips
                .iter()
                .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?))),
        )
        .map(|((a, b), _)| (a.to_string(), b.to_string())),
    }
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub count: usize,
}

impl DurationStats {
    pub fn total_days(&self) -> f64 {
        self.total_secs / SECONDS_PER_DAY
    }

    /// True mean in minutes; `None` when there are no trips.
    pub fn mean_minutes(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total_secs / self.count as f64 / 60.0)
        }
    }
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    DurationStats {
        total_secs: table.trips().iter().map(|t| t.duration_secs).sum(),
        count: table.len(),
    }
}

/// Earliest, latest and most common birth year among rows that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Demographics. `None` fields mean the column is absent from the table; a present
/// column with no usable cells gives an empty count list or a `Some(None)` birth year.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<Option<BirthYearStats>>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = table.trips();
    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.as_deref()));
    let genders = table
        .has_gender()
        .then(|| value_counts(trips.iter().filter_map(|t| t.gender.as_deref())));
    let birth_years = table.has_birth_year().then(|| {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        let (common, _) = most_common(years.iter().copied())?;
        Some(BirthYearStats {
            earliest: years.iter().copied().min()?,
            most_recent: years.iter().copied().max()?,
            most_common: common,
        })
    });
    UserStats {
        user_types,
        genders,
        birth_years,
    }
}
