/// Counters collected while sorting, reported in verbose mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sort `values` ascending in place with bubble sort.
///
/// Each pass sweeps left to right swapping out-of-order neighbours. The sort
/// stops after the first pass without a swap. After every pass the largest
/// remaining value has settled at the end, so the next pass stops one short.
pub fn bubble_sort(values: &mut [i64]) -> SortStats {
    let mut stats = SortStats::default();
    let mut end = values.len();

    while end > 1 {
        stats.passes += 1;
        let mut swapped = false;

        for i in 0..end - 1 {
            stats.comparisons += 1;
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        end -= 1;
    }

    stats
}
