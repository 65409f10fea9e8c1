//! bikeshare_stats
//!
//! Explore US bikeshare trip logs (Chicago, New York City, Washington) from the
//! terminal. Pairs with the interactive `bikeshare` CLI.
//!
//! ### Features
//! - Load one city's CSV trip log, or all three concatenated
//! - Filter by month and day of week (a trip matches on its start or its end)
//! - Most frequent travel times, stations and trips
//! - Total and average trip duration
//! - User type, gender and birth year breakdowns where the data has them
//!
//! ### Example
//! ```no_run
//! use bikeshare_stats::{City, FilterSelection};
//! use chrono::Month;
//!
//! let selection = FilterSelection {
//!     city: Some(City::Chicago),
//!     month: Some(Month::March),
//!     day: None,
//! };
//! let table = bikeshare_stats::storage::load_data("data", &selection)?;
//! let stats = bikeshare_stats::stats::time_stats(&table);
//! println!("{:#?}", stats);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod models;
pub mod prompt;
pub mod report;
pub mod stats;
pub mod storage;

pub use models::{City, FilterSelection, Trip, TripTable};
pub use storage::LoadError;
