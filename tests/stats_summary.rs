use bikeshare_stats::report;
use bikeshare_stats::stats::{self, BirthYearStats};
use bikeshare_stats::{FilterSelection, Trip, TripTable};
use chrono::{Month, NaiveDate, NaiveDateTime};

fn ts(m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn trip(start: NaiveDateTime, secs: f64) -> Trip {
    let end = start + chrono::Duration::seconds(secs as i64);
    Trip::new(start, end, Some("Start".into()), Some("End".into()), secs)
}

fn render(table: &TripTable, f: fn(&mut Vec<u8>, &TripTable) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf, table).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn january_filter_end_to_end() {
    let table = TripTable::new(
        vec![
            trip(ts(1, 2, 8), 600.0),
            trip(ts(2, 7, 9), 600.0),
            trip(ts(1, 9, 8), 600.0),
        ],
        false,
        false,
    );
    let sel = FilterSelection {
        month: Some(Month::January),
        ..Default::default()
    };
    let jan = table.filtered(&sel);
    assert_eq!(jan.len(), 2);

    let t = stats::time_stats(&jan);
    assert_eq!(t.month.as_deref(), Some("January"));
    assert_eq!(t.weekday.as_deref(), Some("Monday"));
    assert_eq!(t.start_hour, Some(8));

    let text = render(&jan, report::time_report);
    assert!(text.contains("The most used month is 'January'"));
    assert!(text.contains("This took "));
}

#[test]
fn duration_reports_days_and_true_mean() {
    let table = TripTable::new(
        vec![
            trip(ts(1, 2, 8), 60.0),
            trip(ts(1, 2, 9), 120.0),
            trip(ts(1, 2, 10), 180.0),
        ],
        false,
        false,
    );
    let d = stats::duration_stats(&table);
    assert!((d.total_days() - 360.0 / 86_400.0).abs() < 1e-12);
    assert_eq!(d.mean_minutes(), Some(2.0));

    let text = render(&table, report::duration_report);
    assert!(text.contains("The average duration of the trips is 2 minutes"));
}

#[test]
fn user_stats_without_gender_column() {
    let table = TripTable::new(
        vec![
            trip(ts(1, 2, 8), 60.0).with_user(Some("Subscriber".into()), None, None),
            trip(ts(1, 3, 8), 60.0).with_user(Some("Customer".into()), None, None),
            trip(ts(1, 4, 8), 60.0).with_user(Some("Subscriber".into()), None, None),
        ],
        false,
        false,
    );
    let u = stats::user_stats(&table);
    assert_eq!(
        u.user_types,
        vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
    );
    assert_eq!(u.genders, None);
    assert_eq!(u.birth_years, None);

    let text = render(&table, report::user_report);
    assert!(text.contains("There is no information of Users Gender in this dataset."));
    assert!(text.contains("There is no Users Birth Year information in this dataset."));
}

#[test]
fn birth_years_skip_missing_cells() {
    let table = TripTable::new(
        vec![
            trip(ts(1, 2, 8), 60.0).with_user(None, Some("Male".into()), Some(1990)),
            trip(ts(1, 3, 8), 60.0).with_user(None, Some("Female".into()), None),
            trip(ts(1, 4, 8), 60.0).with_user(None, Some("Female".into()), Some(1960)),
            trip(ts(1, 5, 8), 60.0).with_user(None, None, Some(2001)),
        ],
        true,
        true,
    );
    let u = stats::user_stats(&table);
    assert!(u.user_types.is_empty());
    assert_eq!(
        u.genders,
        Some(vec![("Female".to_string(), 2), ("Male".to_string(), 1)])
    );
    // all years appear once, so the first one wins
    assert_eq!(
        u.birth_years,
        Some(Some(BirthYearStats {
            earliest: 1960,
            most_recent: 2001,
            most_common: 1990,
        }))
    );
}

#[test]
fn count_table_label_width_is_longest_plus_three() {
    for counts in [
        vec![("Subscriber".to_string(), 7), ("Customer".to_string(), 12)],
        vec![("Female".to_string(), 300), ("Male".to_string(), 9)],
        vec![("Dependent".to_string(), 1)],
    ] {
        let longest = counts.iter().map(|(l, _)| l.len()).max().unwrap();
        let (label_w, count_w) = report::count_table_widths(&counts);
        assert_eq!(label_w, longest + 3);
        let max = counts.iter().map(|(_, c)| *c).max().unwrap();
        assert_eq!(count_w, max.to_string().len());

        let mut buf = Vec::new();
        report::write_count_table(&mut buf, "things", "kind", &counts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for row in text.lines().skip(3).filter(|l| !l.is_empty()) {
            assert_eq!(row.find('|'), Some(label_w));
        }
    }
}

#[test]
fn station_popularity_breaks_ties_by_first_row() {
    let mk = |s: &str, e: &str| {
        Trip::new(ts(1, 2, 8), ts(1, 2, 9), Some(s.into()), Some(e.into()), 60.0)
    };
    let table = TripTable::new(
        vec![mk("B", "X"), mk("A", "Y"), mk("A", "X"), mk("B", "Y")],
        false,
        false,
    );
    let s = stats::station_stats(&table);
    assert_eq!(s.start_station.as_deref(), Some("B"));
    assert_eq!(s.end_station.as_deref(), Some("X"));
    assert_eq!(s.trip, Some(("B".to_string(), "X".to_string())));
}

#[test]
fn blank_stations_never_win_popularity() {
    let blank = || Trip::new(ts(4, 5, 7), ts(4, 5, 8), None, None, 60.0);
    let table = TripTable::new(
        vec![
            blank(),
            Trip::new(
                ts(4, 6, 7),
                ts(4, 6, 8),
                Some("Union Station".into()),
                Some("Lincoln Memorial".into()),
                60.0,
            ),
            blank(),
            Trip::new(ts(4, 7, 7), ts(4, 7, 8), Some("Union Station".into()), None, 60.0),
        ],
        false,
        false,
    );
    let s = stats::station_stats(&table);
    assert_eq!(s.start_station.as_deref(), Some("Union Station"));
    assert_eq!(s.end_station.as_deref(), Some("Lincoln Memorial"));
    assert_eq!(
        s.trip,
        Some(("Union Station".to_string(), "Lincoln Memorial".to_string()))
    );

    let only_blank = TripTable::new(vec![blank(), blank()], false, false);
    let s = stats::station_stats(&only_blank);
    assert_eq!(s.start_station, None);
    assert_eq!(s.trip, None);
    let text = render(&only_blank, report::station_report);
    assert!(text.contains("No data available for the start station."));
}
