use heliograph::observations::RawRow;

/// Latitude of each fixture spot, keyed by id.
pub const FIXTURE_SPOTS: [(&str, f64); 3] = [("A", 15.0), ("B", -30.0), ("C", 0.0)];

/// Daily longitude measurements shared by all three fixture spots; the trailing
/// July 3 row has no longitude yet.
pub const FIXTURE_LONGS: [Option<f64>; 12] = [
    Some(-60.0),
    Some(-45.0),
    Some(-32.0),
    Some(-19.0),
    Some(-11.0),
    Some(7.0),
    Some(22.0),
    Some(34.0),
    Some(44.0),
    Some(61.0),
    Some(75.0),
    None,
];

pub const FIXTURE_DATES: [&str; 12] = [
    "June 22, 2024",
    "June 23, 2024",
    "June 24, 2024",
    "June 25, 2024",
    "June 26, 2024",
    "June 27, 2024",
    "June 28, 2024",
    "June 29, 2024",
    "June 30, 2024",
    "July 1, 2024",
    "July 2, 2024",
    "July 3, 2024",
];

/// The three-spot observation table used across the integration tests.
pub fn fixture_rows() -> Vec<RawRow> {
    let mut rows = Vec::new();
    for (id, lat) in FIXTURE_SPOTS {
        for (date, long) in FIXTURE_DATES.iter().zip(FIXTURE_LONGS) {
            rows.push(RawRow::new(id, date, Some(lat), long));
        }
    }
    rows
}
