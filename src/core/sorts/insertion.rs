use std::cmp::Ordering;

use crate::SortError;

/// Insertion sort, in place and stable.
///
/// Maintains a sorted prefix `[0, i)` and sinks the element at `i` left past
/// strictly greater neighbors. Equal elements are never moved past each
/// other, so relative input order among equals is preserved. O(n^2) worst
/// case, O(n) on already sorted input, no extra memory.
pub fn insertion_sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
    data
}

/// Insertion sort over partially ordered elements.
///
/// Identical to [`insertion_sort`] but compares with `partial_cmp` and stops
/// at the first pair that cannot be ordered (e.g. a NaN among floats). On
/// error the slice may be left partially reordered; no element is lost.
pub fn try_insertion_sort<T: PartialOrd>(data: &mut [T]) -> Result<&mut [T], SortError> {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            match data[j - 1].partial_cmp(&data[j]) {
                Some(Ordering::Greater) => {
                    data.swap(j - 1, j);
                    j -= 1;
                }
                Some(_) => break,
                None => {
                    return Err(SortError::IncomparableElements {
                        left: j - 1,
                        right: j,
                    });
                }
            }
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_nondecreasing<T: PartialOrd>(data: &[T]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![5];
        insertion_sort(&mut one);
        assert_eq!(one, vec![5]);
    }

    #[test]
    fn test_small_unsorted() {
        let mut data = vec![3, 1, 2];
        insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_input_unchanged() {
        let mut data = vec![1, 2, 3, 4, 5];
        insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_input() {
        let mut data: Vec<i32> = (1..=20).rev().collect();
        insertion_sort(&mut data);
        let expected: Vec<i32> = (1..=20).collect();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_permutation_invariant() {
        let original = vec![7, 3, 3, -1, 0, 42, 7, 7, -5];
        let mut data = original.clone();
        insertion_sort(&mut data);

        let mut expected = original;
        expected.sort();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_idempotent() {
        let mut data = vec![9, 1, 8, 2, 7, 3];
        insertion_sort(&mut data);
        let once = data.clone();
        insertion_sort(&mut data);
        assert_eq!(data, once);
    }

    #[test]
    fn test_stability() {
        // Ordering looks at the key only; tags record input order.
        #[derive(Debug, Clone, Copy)]
        struct Item {
            key: i32,
            tag: usize,
        }
        impl PartialEq for Item {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }
        impl Eq for Item {}
        impl PartialOrd for Item {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Item {
            fn cmp(&self, other: &Self) -> Ordering {
                self.key.cmp(&other.key)
            }
        }

        let keys = [2, 1, 2, 1, 2];
        let mut data: Vec<Item> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Item { key, tag })
            .collect();
        insertion_sort(&mut data);

        let tags: Vec<usize> = data.iter().map(|item| item.tag).collect();
        assert_eq!(tags, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_random_large() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-10000..10000)).collect();
        insertion_sort(&mut data);
        assert!(is_nondecreasing(&data));
    }

    #[test]
    fn test_try_sorts_floats() {
        let mut data = vec![3.5, -1.0, 2.25, 0.0];
        try_insertion_sort(&mut data).unwrap();
        assert_eq!(data, vec![-1.0, 0.0, 2.25, 3.5]);
    }

    #[test]
    fn test_try_rejects_nan() {
        let mut data = vec![1.0, f64::NAN, 2.0];
        let err = try_insertion_sort(&mut data).unwrap_err();
        assert!(matches!(err, SortError::IncomparableElements { .. }));
    }
}
