#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::fixture;
    use piste::dataset::{CountryRanks, Dataset};

    fn ranks(dataset: &Dataset, name: &str) -> CountryRanks {
        dataset.find(name).unwrap().ranks
    }

    #[test]
    fn test_united_states_price_ranks_share_ties() {
        let dataset = fixture();

        assert_eq!(ranks(&dataset, "Vail").price, 1);
        assert_eq!(ranks(&dataset, "Mammoth").price, 2);
        assert_eq!(ranks(&dataset, "Alta").price, 3);
        assert_eq!(ranks(&dataset, "Killington").price, 3);
        assert_eq!(ranks(&dataset, "Mount Hood Meadows").price, 5);
        assert_eq!(ranks(&dataset, "Snowbird").price, 6);
    }

    #[test]
    fn test_zero_price_ranked_before_normalization() {
        let dataset = fixture();

        // Raw price 0 is last in its country even though it now reads 1.
        assert_eq!(ranks(&dataset, "Timberline").price, 7);
    }

    #[test]
    fn test_full_rank_card_for_killington() {
        let dataset = fixture();

        assert_eq!(
            ranks(&dataset, "Killington"),
            CountryRanks {
                elevation: 7,
                price: 3,
                slopes: 4,
                cannons: 1,
            }
        );
    }

    #[test]
    fn test_ranks_are_per_country() {
        let dataset = fixture();

        // Zermatt is alone in Switzerland.
        assert_eq!(
            ranks(&dataset, "Zermatt"),
            CountryRanks {
                elevation: 1,
                price: 1,
                slopes: 1,
                cannons: 1,
            }
        );
        // Mont Tremblant is cheap overall but second of two in Canada.
        assert_eq!(ranks(&dataset, "Mont Tremblant").price, 2);
        assert_eq!(ranks(&dataset, "Mont Tremblant").cannons, 1);
    }

    #[test]
    fn test_tied_cannons_in_austria() {
        let dataset = fixture();

        assert_eq!(ranks(&dataset, "Lech Zurs").cannons, 1);
        assert_eq!(ranks(&dataset, "Kitzbuehel").cannons, 1);
        assert_eq!(ranks(&dataset, "Hintertux Glacier").cannons, 3);
        assert_eq!(ranks(&dataset, "Hintertux Glacier").elevation, 1);
    }

    #[test]
    fn test_every_country_forms_a_descending_ranking() {
        let dataset = fixture();

        for resort in dataset.resorts() {
            let peers: Vec<_> = dataset
                .resorts()
                .iter()
                .filter(|r| r.country() == resort.country())
                .collect();
            let higher = peers
                .iter()
                .filter(|r| r.row.highest_point > resort.row.highest_point)
                .count() as u32;
            assert_eq!(resort.ranks.elevation, higher + 1, "{}", resort.name());

            let more_slopes = peers
                .iter()
                .filter(|r| r.row.total_slopes > resort.row.total_slopes)
                .count() as u32;
            assert_eq!(resort.ranks.slopes, more_slopes + 1, "{}", resort.name());
        }
    }
}
