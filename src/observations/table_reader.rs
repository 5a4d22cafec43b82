use camino::Utf8Path;

use super::{observations_from_rows, Observation, RawRow};
use crate::heliograph_errors::HeliographError;

/// Read sunspot observations from a CSV file.
///
/// The file must carry a header row naming the `id`, `date`, `lat` and `long` columns.
/// Empty latitude/longitude cells deserialize to missing coordinates; rows that fail
/// the usual cleaning (empty id, unparseable date) are dropped, exactly as for
/// in-memory rows.
///
/// Arguments
/// ---------
/// * `path`: path to the CSV file
///
/// Return
/// ------
/// * the cleaned observations in file order, or a [`HeliographError`] when the file
///   cannot be read or a row is structurally malformed
pub fn observations_from_csv(path: &Utf8Path) -> Result<Vec<Observation>, HeliographError> {
    let mut reader = csv::Reader::from_path(path.as_std_path())?;

    let mut rows: Vec<RawRow> = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(observations_from_rows(&rows))
}

#[cfg(test)]
mod table_reader_test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_observations_from_csv() {
        let path = std::env::temp_dir().join("heliograph_table_reader_test.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,date,lat,long").unwrap();
        writeln!(file, "A,\"June 22, 2024\",15,-60").unwrap();
        writeln!(file, "A,\"June 23, 2024\",15,-45").unwrap();
        writeln!(file, "A,\"July 3, 2024\",15,").unwrap();
        writeln!(file, ",,,").unwrap();
        drop(file);

        let utf8_path = Utf8Path::from_path(&path).unwrap();
        let observations = observations_from_csv(utf8_path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].time, 60483.0);
        assert_eq!(observations[0].long, Some(-60.0));
        assert_eq!(observations[2].long, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = Utf8Path::new("/definitely/not/here.csv");
        assert!(observations_from_csv(missing).is_err());
    }
}
