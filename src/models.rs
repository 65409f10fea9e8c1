use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use std::fmt;

/// A value the user can pick at a filter prompt.
///
/// `"all"` is not part of [`Choice::ALLOWED`]; the prompt handles it and maps it to `None`.
pub trait Choice: Copy + Sized + 'static {
    /// Human label used in prompt texts, e.g. "city name".
    const DETAIL: &'static str;
    /// Every selectable value, in display order.
    const ALLOWED: &'static [Self];

    fn name(&self) -> &'static str;

    /// Case-insensitive lookup by display name.
    fn parse_name(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALLOWED
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
    }
}

/// Cities with a trip log on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// `"New York City"` -> `"new_york_city.csv"`.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name().to_lowercase().replace(' ', "_"))
    }
}

impl Choice for City {
    const DETAIL: &'static str = "city name";
    const ALLOWED: &'static [Self] = &[City::Chicago, City::NewYorkCity, City::Washington];

    fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The published trip logs cover January through June only.
impl Choice for Month {
    const DETAIL: &'static str = "month";
    const ALLOWED: &'static [Self] = &[
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    fn name(&self) -> &'static str {
        Month::name(self)
    }
}

impl Choice for Weekday {
    const DETAIL: &'static str = "week day";
    const ALLOWED: &'static [Self] = &[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn name(&self) -> &'static str {
        weekday_name(*self)
    }
}

/// Full English day name; chrono only formats the three-letter form.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month of a timestamp as a `chrono::Month`.
pub fn month_of(ts: &NaiveDateTime) -> Month {
    // month() is always 1..=12
    Month::try_from(ts.month() as u8).unwrap_or(Month::January)
}

/// The user's filter choice. `None` in any dimension means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub city: Option<City>,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    /// Cities whose files must be read for this selection.
    pub fn cities(&self) -> Vec<City> {
        match self.city {
            Some(c) => vec![c],
            None => City::ALLOWED.to_vec(),
        }
    }

    /// Whether a trip passes the month and day filters.
    ///
    /// A trip matches a dimension when either its start or its end falls on the
    /// selected value, so trips crossing midnight or a month boundary are kept
    /// under both.
    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = self
            .month
            .is_none_or(|m| trip.month() == m || month_of(&trip.end_time()) == m);
        let day_ok = self
            .day
            .is_none_or(|d| trip.weekday() == d || trip.end_time().weekday() == d);
        month_ok && day_ok
    }
}

/// One bicycle rental.
///
/// The month, weekday and hour are derived from the start time once, in [`Trip::new`].
/// Both timestamps are private so the derived values cannot drift from them.
/// Stations are `None` when the source cell was blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Seconds. Some sources write this as a float (`1039.0`).
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: Month,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: Option<String>,
        end_station: Option<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            month: month_of(&start_time),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_user(
        mut self,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        self.user_type = user_type;
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Start hour, 0..=23.
    pub fn start_hour(&self) -> u32 {
        self.hour
    }
}

/// Ordered trips plus which optional columns the sources carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    trips: Vec<Trip>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// Row-wise concatenation. An optional column is present in the result if any
    /// part carried it; rows from parts without it simply have `None` there.
    pub fn concat(parts: impl IntoIterator<Item = TripTable>) -> Self {
        let mut out = TripTable::default();
        for part in parts {
            out.has_gender |= part.has_gender;
            out.has_birth_year |= part.has_birth_year;
            out.trips.extend(part.trips);
        }
        out
    }

    /// New table with only the rows matching `selection`. `self` is left untouched.
    pub fn filtered(&self, selection: &FilterSelection) -> Self {
        Self {
            trips: self
                .trips
                .iter()
                .filter(|t| selection.matches(t))
                .cloned()
                .collect(),
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }
}
