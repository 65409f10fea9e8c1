//! Loading city trip logs from CSV into a [`TripTable`].

use crate::models::{City, FilterSelection, Trip, TripTable};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Accepted timestamp layout; `%.f` also matches when there are no fractional seconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file for {city} not found at {}", .path.display())]
    MissingSource { city: City, path: PathBuf },
    #[error("{}: row {row}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        row: u64,
        #[source]
        source: csv::Error,
    },
    #[error("{}: row {row}: invalid {column} timestamp {value:?}", .path.display())]
    BadTimestamp {
        path: PathBuf,
        row: u64,
        column: &'static str,
        value: String,
    },
    #[error("{}: row {row}: invalid Birth Year {value}", .path.display())]
    BadBirthYear { path: PathBuf, row: u64, value: f64 },
}

/// Raw CSV row. Unknown columns (e.g. a leading index column) are ignored.
#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Written as `1992.0` in some files, empty when unknown.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

fn parse_timestamp(
    value: &str,
    column: &'static str,
    path: &Path,
    row: u64,
) -> Result<NaiveDateTime, LoadError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        LoadError::BadTimestamp {
            path: path.to_path_buf(),
            row,
            column,
            value: value.to_string(),
        }
    })
}

/// Accept whole-number years only; `1992.0` is fine, `1992.5` and `NaN` are not.
fn parse_birth_year(
    value: Option<f64>,
    path: &Path,
    row: u64,
) -> Result<Option<i32>, LoadError> {
    match value {
        None => Ok(None),
        Some(y) if y.is_finite() && y.fract() == 0.0 && y.abs() <= i32::MAX as f64 => {
            Ok(Some(y as i32))
        }
        Some(y) => Err(LoadError::BadBirthYear {
            path: path.to_path_buf(),
            row,
            value: y,
        }),
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Read a single trip log.
///
/// Malformed timestamps, durations and birth years are errors; nothing is coerced
/// to missing. Blank text cells become `None`.
pub fn read_trips<P: AsRef<Path>>(path: P) -> Result<TripTable, LoadError> {
    let path = path.as_ref();
    let csv_err = |row: u64| {
        let path = path.to_path_buf();
        move |source: csv::Error| LoadError::Csv { path, row, source }
    };

    let mut rdr = csv::Reader::from_path(path).map_err(csv_err(0))?;
    let headers = rdr.headers().map_err(csv_err(0))?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for (i, result) in rdr.deserialize::<TripRow>().enumerate() {
        // 1-based data row, header excluded
        let row = i as u64 + 1;
        let r = result.map_err(csv_err(row))?;
        let start = parse_timestamp(&r.start_time, "Start Time", path, row)?;
        let end = parse_timestamp(&r.end_time, "End Time", path, row)?;
        let birth_year = parse_birth_year(r.birth_year, path, row)?;
        let trip = Trip::new(
            start,
            end,
            non_blank(r.start_station),
            non_blank(r.end_station),
            r.trip_duration,
        )
        .with_user(non_blank(r.user_type), non_blank(r.gender), birth_year);
        trips.push(trip);
    }

    info!("read {} trips from {}", trips.len(), path.display());
    Ok(TripTable::new(trips, has_gender, has_birth_year))
}

/// Read every city file the selection needs and concatenate them in city order.
pub fn load_unfiltered<P: AsRef<Path>>(
    data_dir: P,
    selection: &FilterSelection,
) -> Result<TripTable, LoadError> {
    let data_dir = data_dir.as_ref();
    let mut parts = Vec::new();
    for city in selection.cities() {
        let path = data_dir.join(city.file_name());
        if !path.is_file() {
            return Err(LoadError::MissingSource { city, path });
        }
        parts.push(read_trips(&path)?);
    }
    Ok(TripTable::concat(parts))
}

/// Load the trips for `selection` and apply its month and day filters.
pub fn load_data<P: AsRef<Path>>(
    data_dir: P,
    selection: &FilterSelection,
) -> Result<TripTable, LoadError> {
    let all = load_unfiltered(data_dir, selection)?;
    let table = all.filtered(selection);
    debug!(
        "filter {:?}: kept {} of {} trips",
        selection,
        table.len(),
        all.len()
    );
    Ok(table)
}
