#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{fixture, names};
    use piste::view::{filter_resorts, map_view, FlagMatching, MapLayout, MapQuery};
    use piste::Flag;

    #[test]
    fn test_no_selection_filters_on_price_only() {
        let dataset = fixture();
        let resorts = filter_resorts(&dataset, 60.0, &[], FlagMatching::All);

        assert_eq!(
            names(resorts),
            vec![
                "Timberline",
                "Snowbird",
                "Mont Tremblant",
                "Lech Zurs",
                "Kitzbuehel",
                "Hintertux Glacier"
            ]
        );
    }

    #[test]
    fn test_price_threshold_is_strict() {
        let dataset = fixture();
        let resorts = filter_resorts(&dataset, 59.0, &[], FlagMatching::All);

        assert!(!names(resorts.clone()).contains(&"Lech Zurs"));
        assert!(resorts.iter().all(|r| r.price() < 59.0));
        assert_eq!(resorts.len(), 4);
    }

    #[test]
    fn test_single_flag() {
        let dataset = fixture();
        let resorts = filter_resorts(&dataset, 60.0, &[Flag::Nightskiing], FlagMatching::All);

        assert_eq!(
            names(resorts),
            vec!["Timberline", "Snowbird", "Mont Tremblant", "Kitzbuehel"]
        );
    }

    #[test]
    fn test_nightskiing_and_snowparks_in_both_modes() {
        let dataset = fixture();
        let selections = [Flag::Snowparks, Flag::Nightskiing];

        for matching in [FlagMatching::All, FlagMatching::Legacy] {
            let resorts = filter_resorts(&dataset, 60.0, &selections, matching);
            assert_eq!(
                names(resorts),
                vec!["Snowbird", "Mont Tremblant", "Kitzbuehel"]
            );
        }
    }

    #[test]
    fn test_other_pair_enforced_by_default() {
        let dataset = fixture();
        let selections = [Flag::Nightskiing, Flag::SummerSkiing];
        let resorts = filter_resorts(&dataset, 60.0, &selections, FlagMatching::All);

        assert_eq!(names(resorts), vec!["Timberline"]);
    }

    #[test]
    fn test_other_pair_ignored_in_legacy_mode() {
        let dataset = fixture();
        let selections = [Flag::Nightskiing, Flag::SummerSkiing];
        let legacy = filter_resorts(&dataset, 60.0, &selections, FlagMatching::Legacy);
        let price_only = filter_resorts(&dataset, 60.0, &[], FlagMatching::Legacy);

        assert_eq!(legacy.len(), 6);
        assert_eq!(names(legacy), names(price_only));
    }

    #[test]
    fn test_all_three_flags() {
        let dataset = fixture();

        for matching in [FlagMatching::All, FlagMatching::Legacy] {
            let resorts = filter_resorts(&dataset, 100.0, &Flag::ALL, matching);
            assert_eq!(names(resorts), vec!["Mount Hood Meadows"]);
        }
    }

    #[test]
    fn test_map_view_header_and_layout() {
        let dataset = fixture();
        let query = MapQuery {
            price: 20.0,
            selections: vec![],
        };
        let view = map_view(&dataset, &query, &MapLayout::default());

        insta::assert_snapshot!(view.header, @"Resorts less than $20/night");
        assert_eq!(view.figure.points.len(), 1);

        let point = &view.figure.points[0];
        assert_eq!(point.resort, "Timberline");
        assert_eq!(point.z, 1.0);
        assert_eq!(point.lat, 45.33);

        assert_eq!(view.figure.center.lat, 44.5);
        assert_eq!(view.figure.center.lon, -97.5);
        assert_eq!(view.figure.zoom, 1.85);
        assert_eq!(view.figure.radius, 20);
        assert_eq!(view.figure.map_style, "open-street-map");
        assert_eq!(view.figure.color_scale, "Viridis");
    }

    #[test]
    fn test_map_view_uses_layout_matching_mode() {
        let dataset = fixture();
        let query = MapQuery {
            price: 60.0,
            selections: vec![Flag::Snowparks, Flag::SummerSkiing],
        };
        let legacy = MapLayout {
            flag_matching: FlagMatching::Legacy,
            ..MapLayout::default()
        };

        let strict = map_view(&dataset, &query, &MapLayout::default());
        let loose = map_view(&dataset, &query, &legacy);

        assert_eq!(strict.figure.points.len(), 1);
        assert_eq!(strict.figure.points[0].resort, "Hintertux Glacier");
        assert_eq!(loose.figure.points.len(), 6);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let dataset = fixture();
        let query = MapQuery {
            price: 1.0,
            selections: vec![Flag::SummerSkiing],
        };
        let view = map_view(&dataset, &query, &MapLayout::default());

        assert!(view.figure.points.is_empty());
        assert_eq!(view.header, "Resorts less than $1/night");
    }
}
