//! Plain-text rendering of the trip statistics.
//!
//! Every report prints its own heading, the statistics, the wall-clock time the
//! computation took and a separator line. Output goes to any `io::Write` so the
//! binary can hand in stdout and tests a `Vec<u8>`.

use crate::models::TripTable;
use crate::stats::{self, DurationStats, StationStats, TimeStats, UserStats};
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Instant;

const SEPARATOR_WIDTH: usize = 40;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn write_most_common<W: Write, T: Display>(
    out: &mut W,
    value: Option<T>,
    detail: &str,
) -> io::Result<()> {
    match value {
        Some(v) => writeln!(out, "The most used {detail} is '{v}'"),
        None => writeln!(out, "No data available for the {detail}."),
    }
}

fn write_footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", separator())
}

/// Widths of the label and count columns of a count table.
///
/// The label column is three wider than the longest label; the count column is
/// as wide as the largest count written in decimal.
pub fn count_table_widths(counts: &[(String, usize)]) -> (usize, usize) {
    let label = counts
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0)
        + 3;
    let count = counts
        .iter()
        .map(|(_, c)| *c)
        .max()
        .unwrap_or(0)
        .to_string()
        .len();
    (label, count)
}

/// Two-column table of distinct values and how often they occur.
pub fn write_count_table<W: Write>(
    out: &mut W,
    details: &str,
    type_name: &str,
    counts: &[(String, usize)],
) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "No {details} data available.\n");
    }
    let (lw, cw) = count_table_widths(counts);
    writeln!(out, "The types and count of {details} are: ")?;
    writeln!(out, "{type_name:>lw$}|{:<cw$}", "total")?;
    writeln!(out, "{}|{}|", "-".repeat(lw), "-".repeat(cw))?;
    for (label, total) in counts {
        writeln!(out, "{label:>lw$}|{total:<cw$}|")?;
    }
    writeln!(out)
}

pub fn write_time_stats<W: Write>(out: &mut W, s: &TimeStats) -> io::Result<()> {
    write_most_common(out, s.month.as_deref(), "month")?;
    write_most_common(out, s.weekday.as_deref(), "day of week")?;
    write_most_common(out, s.start_hour, "start hour")
}

pub fn write_station_stats<W: Write>(out: &mut W, s: &StationStats) -> io::Result<()> {
    write_most_common(out, s.start_station.as_deref(), "start station")?;
    write_most_common(out, s.end_station.as_deref(), "end station")?;
    write_most_common(
        out,
        s.trip.as_ref().map(|(a, b)| format!("{a}' to '{b}")),
        "trip",
    )
}

pub fn write_duration_stats<W: Write>(out: &mut W, s: &DurationStats) -> io::Result<()> {
    writeln!(out, "The total time of the trips is {} days", s.total_days())?;
    match s.mean_minutes() {
        Some(m) => writeln!(out, "The average duration of the trips is {m} minutes"),
        None => writeln!(out, "There are no trips to average."),
    }
}

pub fn write_user_stats<W: Write>(out: &mut W, s: &UserStats) -> io::Result<()> {
    write_count_table(out, "users", "user type", &s.user_types)?;

    match &s.genders {
        Some(g) => write_count_table(out, "gender", "gender", g)?,
        None => writeln!(out, "There is no information of Users Gender in this dataset.")?,
    }

    match &s.birth_years {
        Some(Some(b)) => {
            writeln!(out, "The earliest year of birth is: {}", b.earliest)?;
            writeln!(out, "The most recent year of birth is: {}", b.most_recent)?;
            writeln!(out, "The most common year of birth is: {}", b.most_common)
        }
        Some(None) => writeln!(out, "No birth year values are recorded for these trips."),
        None => writeln!(out, "There is no Users Birth Year information in this dataset."),
    }
}

/// Compute and print the most frequent times of travel.
pub fn time_report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();
    write_time_stats(out, &stats::time_stats(table))?;
    write_footer(out, started)
}

/// Compute and print the most popular stations and trip.
pub fn station_report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();
    write_station_stats(out, &stats::station_stats(table))?;
    write_footer(out, started)
}

/// Compute and print total and average trip duration.
pub fn duration_report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();
    write_duration_stats(out, &stats::duration_stats(table))?;
    write_footer(out, started)
}

/// Compute and print user type, gender and birth year statistics.
pub fn user_report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();
    write_user_stats(out, &stats::user_stats(table))?;
    write_footer(out, started)
}

/// All four reports in their fixed order.
pub fn full_report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    time_report(out, table)?;
    station_report(out, table)?;
    duration_report(out, table)?;
    user_report(out, table)
}
