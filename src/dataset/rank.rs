//! Per-country ranking of resort attributes.

use std::collections::HashMap;

use super::record::{CountryRanks, ResortRow};

/// Descending competition ranking ("1224" ranking).
///
/// The largest value gets rank 1. Tied values share the best rank of their
/// run, and the rank after a run of ties skips accordingly.
pub fn competition_rank_desc(values: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut ranks = vec![0u32; values.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = match position.checked_sub(1).map(|prev| order[prev]) {
            Some(prev) if values[prev] == values[index] => ranks[prev],
            _ => position as u32 + 1,
        };
    }
    ranks
}

/// Compute the four country ranks for every row, aligned to input order.
pub fn country_ranks(rows: &[ResortRow]) -> Vec<CountryRanks> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        groups.entry(row.country.as_str()).or_default().push(index);
    }

    let mut ranks = vec![CountryRanks::default(); rows.len()];
    for members in groups.values() {
        let elevation = rank_members(rows, members, |r| r.highest_point);
        let price = rank_members(rows, members, |r| r.price);
        let slopes = rank_members(rows, members, |r| r.total_slopes);
        let cannons = rank_members(rows, members, |r| r.snow_cannons);

        for (slot, &row_index) in members.iter().enumerate() {
            ranks[row_index] = CountryRanks {
                elevation: elevation[slot],
                price: price[slot],
                slopes: slopes[slot],
                cannons: cannons[slot],
            };
        }
    }
    ranks
}

fn rank_members(
    rows: &[ResortRow],
    members: &[usize],
    value: impl Fn(&ResortRow) -> f64,
) -> Vec<u32> {
    let values: Vec<f64> = members.iter().map(|&i| value(&rows[i])).collect();
    competition_rank_desc(&values)
}
