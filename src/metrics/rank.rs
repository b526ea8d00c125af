/// Rank values in descending order using the minimum-rank tie method:
/// tied values share the best position of the tie and the next distinct
/// value skips ahead, so `[100, 100, 50]` ranks as `[1, 1, 3]`.
///
/// Ranks are 1-based and returned in input order.
pub fn min_rank(values: &[u64]) -> Vec<u32> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[b].cmp(&values[a]));

    let mut ranks = vec![0; values.len()];
    for (pos, &i) in order.iter().enumerate() {
        ranks[i] = match pos {
            0 => 1,
            _ if values[i] == values[order[pos - 1]] => ranks[order[pos - 1]],
            _ => pos as u32 + 1,
        };
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::min_rank;

    #[test]
    fn two_way_tie_for_first() {
        assert_eq!(min_rank(&[100, 100, 50]), vec![1, 1, 3]);
    }

    #[test]
    fn ranks_follow_input_order() {
        assert_eq!(min_rank(&[10, 30, 20]), vec![3, 1, 2]);
    }

    #[test]
    fn tie_in_the_middle_skips_next_rank() {
        assert_eq!(min_rank(&[50, 40, 40, 40, 10]), vec![1, 2, 2, 2, 5]);
    }

    #[test]
    fn all_equal_share_first_place() {
        assert_eq!(min_rank(&[0, 0, 0]), vec![1, 1, 1]);
    }

    #[test]
    fn empty() {
        assert!(min_rank(&[]).is_empty());
    }
}
