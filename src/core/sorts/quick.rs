use std::cmp::Ordering;

use crate::SortError;

/// Quick sort, in place, not stable.
///
/// Lomuto partitioning with the last element of each range as pivot.
/// Recursion descends only into the smaller partition while the loop
/// continues on the larger one, so stack depth stays O(log n) even on
/// already sorted or reverse sorted input. Time is O(n log n) average and
/// O(n^2) worst case against the last-element pivot.
pub fn quick_sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1);
    }
    data
}

fn sort_range<T: Ord>(data: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let pivot = partition(data, low, high);
        let left_len = pivot - low;
        let right_len = high - pivot;

        if left_len < right_len {
            if left_len > 1 {
                sort_range(data, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            if right_len > 1 {
                sort_range(data, pivot + 1, high);
            }
            if left_len < 2 {
                break;
            }
            high = pivot - 1;
        }
    }
}

/// Partition `[low, high]` around `data[high]`: afterwards everything at or
/// below the returned index is <= the pivot, everything above is > it, and
/// the pivot sits at the returned index.
fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;
    for j in low..high {
        if data[j] <= data[high] {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

/// Quick sort over partially ordered elements.
///
/// Identical to [`quick_sort`] but compares with `partial_cmp` and stops at
/// the first pair that cannot be ordered, naming both offending indices. On
/// error the slice may be left partially reordered; no element is lost.
pub fn try_quick_sort<T: PartialOrd>(data: &mut [T]) -> Result<&mut [T], SortError> {
    if data.len() > 1 {
        try_sort_range(data, 0, data.len() - 1)?;
    }
    Ok(data)
}

fn try_sort_range<T: PartialOrd>(
    data: &mut [T],
    mut low: usize,
    mut high: usize,
) -> Result<(), SortError> {
    while low < high {
        let pivot = try_partition(data, low, high)?;
        let left_len = pivot - low;
        let right_len = high - pivot;

        if left_len < right_len {
            if left_len > 1 {
                try_sort_range(data, low, pivot - 1)?;
            }
            low = pivot + 1;
        } else {
            if right_len > 1 {
                try_sort_range(data, pivot + 1, high)?;
            }
            if left_len < 2 {
                break;
            }
            high = pivot - 1;
        }
    }
    Ok(())
}

fn try_partition<T: PartialOrd>(
    data: &mut [T],
    low: usize,
    high: usize,
) -> Result<usize, SortError> {
    let mut boundary = low;
    for j in low..high {
        match data[j].partial_cmp(&data[high]) {
            Some(Ordering::Less) | Some(Ordering::Equal) => {
                data.swap(boundary, j);
                boundary += 1;
            }
            Some(Ordering::Greater) => {}
            None => {
                return Err(SortError::IncomparableElements {
                    left: j,
                    right: high,
                });
            }
        }
    }
    data.swap(boundary, high);
    Ok(boundary)
}
