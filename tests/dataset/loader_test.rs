#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{fixture, FIXTURE_CSV};
    use piste::dataset::{Dataset, LoadError};
    use std::io::Write;

    #[test]
    fn test_loads_every_row_in_file_order() {
        let dataset = fixture();

        assert_eq!(dataset.len(), 13);
        assert_eq!(dataset.resorts()[0].name(), "Alta");
        assert_eq!(dataset.resorts()[12].name(), "Zermatt");
    }

    #[test]
    fn test_zero_price_normalized_to_one() {
        let dataset = fixture();

        assert!(dataset.resorts().iter().all(|r| r.price() >= 1.0));
        assert_eq!(dataset.find("Timberline").unwrap().price(), 1.0);
        assert_eq!(dataset.find("Alta").unwrap().price(), 119.0);
    }

    #[test]
    fn test_flags_and_coordinates_are_kept() {
        let dataset = fixture();
        let resort = dataset.find("Mount Hood Meadows").unwrap();

        assert_eq!(resort.row.nightskiing, "Yes");
        assert_eq!(resort.row.summer_skiing, "Yes");
        assert_eq!(resort.row.latitude, 45.33);
        assert_eq!(resort.row.longitude, -121.66);
    }

    #[test]
    fn test_latin1_names_are_decoded() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(
            b"Resort,Latitude,Longitude,Country,Continent,Price,Highest point,Lowest point,\
Total slopes,Total lifts,Snow cannons,Nightskiing,Snowparks,Summer skiing\n",
        );
        bytes.extend_from_slice(b"Z\xFCrs,47.17,10.17,Austria,Europe,59,2450,1720,88,34,120,No,Yes,No\n");

        let dataset = Dataset::from_reader(bytes.as_slice()).unwrap();

        assert_eq!(dataset.resorts()[0].name(), "Zürs");
        assert!(dataset.find("Zürs").is_some());
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!("piste-loader-{}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(FIXTURE_CSV.as_bytes()).unwrap();
        drop(file);

        let dataset = Dataset::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dataset.len(), 13);
        assert_eq!(dataset.country_count(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::from_path("/definitely/not/here/resorts.csv").unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/resorts.csv"));
    }

    #[test]
    fn test_header_only_is_empty_error() {
        let header = FIXTURE_CSV.lines().next().unwrap();
        let err = Dataset::from_reader(header.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let text = format!("{}1,Broken,40.0\n", FIXTURE_CSV);
        let err = Dataset::from_reader(text.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::Csv(_)));
    }
}
