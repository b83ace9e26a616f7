use crate::heap::{heapify_by, sift_down, Before, Reversed};

/// Sorts `data` so that every element comes `before` or ties with its successor.
///
/// In place and not stable: builds a heap under the reversed ordering, then moves the root to
/// the end of the shrinking heap until one element is left.
///
/// O(n log n)
pub fn heap_sort<T, F: Before<T>>(data: &mut [T], before: F) {
    let before = Reversed(before);
    heapify_by(data, &before);

    let mut end = data.len();
    while 1 < end {
        end -= 1;
        data.swap(0, end);
        sift_down(&mut data[..end], 0, &before);
    }
}

/// Ascending by `key`.
///
/// O(n log n)
pub fn heap_sort_by_key<T, K: Ord, KF: Fn(&T) -> K>(data: &mut [T], key: KF) {
    heap_sort(data, |a: &T, b: &T| key(a) < key(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::{Greater, Less};
    use proptest::prelude::*;
    use rand::prelude::*;

    #[test]
    fn sorts_ascending() {
        let mut ints = vec![10, 20, 5, 30];
        let storage = ints.as_ptr();
        heap_sort(&mut ints, |a: &i32, b: &i32| a < b);

        assert_eq!(ints, vec![5, 10, 20, 30]);
        assert_eq!(ints.as_ptr(), storage);
    }

    #[test]
    fn sorts_descending() {
        let mut ints = [10, 20, 5, 30];
        heap_sort(&mut ints, Greater);
        assert_eq!(ints, [30, 20, 10, 5]);
    }

    #[test]
    fn trivial_inputs() {
        let mut empty: Vec<u8> = Vec::new();
        heap_sort(&mut empty, Less);
        assert!(empty.is_empty());

        let mut one = [1];
        heap_sort(&mut one, Less);
        assert_eq!(one, [1]);

        let mut same = [4, 4, 4, 4, 4];
        heap_sort(&mut same, Less);
        assert_eq!(same, [4; 5]);
    }

    #[test]
    fn by_key() {
        let mut words = vec!["pear", "fig", "banana", "kiwi"];
        heap_sort_by_key(&mut words, |w| w.len());

        let lens: Vec<_> = words.iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![3, 4, 4, 6]);
        assert_eq!(words[0], "fig");
        assert_eq!(words[3], "banana");
    }

    #[test]
    fn shuffled_permutation() {
        const N: usize = 4096;
        let mut rng = SmallRng::seed_from_u64(42);

        let mut perm: Vec<_> = (0..N).collect();
        perm.shuffle(&mut rng);
        heap_sort(&mut perm, Less);

        assert!(perm.iter().copied().eq(0..N));
    }

    proptest! {
        #[test]
        fn matches_std_sort(mut items in proptest::collection::vec(-1000..1000i32, 0..500)) {
            let mut expected = items.clone();
            expected.sort_unstable();

            heap_sort(&mut items, Less);
            prop_assert_eq!(items, expected);
        }
    }
}
