#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::fixture;
    use piste::view::{resort_report, HoverData, QueryError, Update};

    #[test]
    fn test_no_hover_is_no_change() {
        let dataset = fixture();

        assert_eq!(resort_report(&dataset, None).unwrap(), Update::NoChange);
        assert_eq!(
            resort_report(&dataset, Some(&HoverData::default())).unwrap(),
            Update::NoChange
        );
    }

    #[test]
    fn test_report_strings() {
        let dataset = fixture();
        let hover = HoverData::for_resort("Killington");

        let report = resort_report(&dataset, Some(&hover))
            .unwrap()
            .into_updated()
            .unwrap();

        insta::assert_snapshot!(report.name, @"Name: Killington");
        assert_eq!(report.elevation_rank, "Elevation: #7");
        assert_eq!(report.price_rank, "Price: #3");
        assert_eq!(report.slope_rank, "Slope: #4");
        assert_eq!(report.cannon_rank, "Cannon: #1");
    }

    #[test]
    fn test_report_uses_unfiltered_ranks() {
        let dataset = fixture();
        let hover = HoverData::for_resort("Timberline");

        let report = resort_report(&dataset, Some(&hover))
            .unwrap()
            .into_updated()
            .unwrap();

        assert_eq!(report.price_rank, "Price: #7");
        assert_eq!(report.cannon_rank, "Cannon: #6");
    }

    #[test]
    fn test_first_hovered_point_wins() {
        let dataset = fixture();
        let hover: HoverData = serde_json::from_str(
            r#"{"points": [{"label": "Vail", "value": 209, "customdata": ["Vail"]}, {"label": "Alta"}]}"#,
        )
        .unwrap();

        let report = resort_report(&dataset, Some(&hover))
            .unwrap()
            .into_updated()
            .unwrap();
        assert_eq!(report.name, "Name: Vail");
        assert_eq!(report.price_rank, "Price: #1");
    }

    #[test]
    fn test_unknown_resort_is_not_found() {
        let dataset = fixture();
        let hover = HoverData::for_resort("Atlantis");

        let err = resort_report(&dataset, Some(&hover)).unwrap_err();
        assert_eq!(err, QueryError::ResortNotFound("Atlantis".to_string()));
    }
}
