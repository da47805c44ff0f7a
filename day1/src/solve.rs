use std::collections::HashMap;

use tracing::trace;

use crate::{error::Error, input::Lists};

/// Occurrence count of each value in a sequence.
pub type FrequencyMap = HashMap<i64, u64>;

pub fn frequencies(nums: &[i64]) -> FrequencyMap {
    nums.iter().fold(HashMap::new(), |mut counts, num| {
        *counts.entry(*num).or_insert(0) += 1;
        counts
    })
}

/// Sum of absolute differences between the two columns once each is sorted.
pub fn total_distance(lists: &Lists) -> Result<u128, Error> {
    let mut left = lists.left().to_vec();
    let mut right = lists.right().to_vec();
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .try_fold(0u128, |summed_diff, (left_num, right_num)| {
            summed_diff
                .checked_add(u128::from(left_num.abs_diff(*right_num)))
                .ok_or(Error::Overflow { metric: "distance" })
        })
}

/// Sum of `value * count in right` over the distinct values of the left column.
///
/// Repeats on the left don't add weight; only the right-hand count does.
pub fn total_proximity(lists: &Lists) -> Result<i128, Error> {
    let left_counts = frequencies(lists.left());
    let right_counts = frequencies(lists.right());
    trace!(
        distinct_left = left_counts.len(),
        distinct_right = right_counts.len(),
        "built frequency maps"
    );
    left_counts
        .keys()
        .filter_map(|num| right_counts.get(num).map(|count| (*num, *count)))
        .try_fold(0i128, |sum, (num, count)| {
            i128::from(num)
                .checked_mul(i128::from(count))
                .and_then(|weighted| sum.checked_add(weighted))
                .ok_or(Error::Overflow { metric: "proximity" })
        })
}
