//! Pure reordering primitives for user-editable lists.
//!
//! All operations return a fresh vector and leave the input untouched,
//! so callers can always re-render from the result. Out-of-bounds
//! indices are a documented no-op rather than an error: "move up" at
//! the top and "move down" at the bottom silently clamp.

/// Returns a copy of `items` with the elements at `first` and `second`
/// exchanged.
///
/// Indices are signed because callers compute neighbours as
/// `index - 1` / `index + 1`; any index outside `[0, len)` returns the
/// input unchanged.
pub fn swap<T: Clone>(items: &[T], first: isize, second: isize) -> Vec<T> {
    let len = items.len() as isize;
    let mut out = items.to_vec();
    if (0..len).contains(&first) && (0..len).contains(&second) {
        out.swap(first as usize, second as usize);
    }
    out
}

/// Returns a copy of `items` without the element at `index`.
///
/// An out-of-bounds index returns the input unchanged, mirroring
/// [`swap`]'s policy.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}

/// Returns a copy of `items` with every element whose key matches
/// `item`'s key removed, then `item` appended.
///
/// The result holds at most one element per key; re-adding an existing
/// key replaces the old element and moves it to the end.
pub fn upsert_by_key<T, K, F>(items: &[T], key_of: F, item: T) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let key = key_of(&item);
    let mut out: Vec<T> = items
        .iter()
        .filter(|existing| key_of(existing) != key)
        .cloned()
        .collect();
    out.push(item);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_in_bounds() {
        assert_eq!(swap(&[1, 2, 3, 4], 1, 2), vec![1, 3, 2, 4]);
    }

    #[test]
    fn swap_negative_index_is_a_no_op() {
        assert_eq!(swap(&[1, 2, 3, 4], -1, 2), vec![1, 2, 3, 4]);
    }

    #[test]
    fn swap_past_the_end_is_a_no_op() {
        assert_eq!(swap(&[1, 2, 3, 4], 1, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn swap_does_not_mutate_the_input() {
        let items = vec![1, 2, 3, 4];
        let swapped = swap(&items, 0, 3);
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(swapped, vec![4, 2, 3, 1]);
    }

    #[test]
    fn swap_preserves_length_and_other_positions() {
        let items = vec!["a", "b", "c", "d", "e"];
        let swapped = swap(&items, 1, 3);
        assert_eq!(swapped.len(), items.len());
        assert_eq!(swapped[1], items[3]);
        assert_eq!(swapped[3], items[1]);
        assert_eq!(swapped[0], items[0]);
        assert_eq!(swapped[2], items[2]);
        assert_eq!(swapped[4], items[4]);
    }

    #[test]
    fn swap_same_index_is_identity() {
        assert_eq!(swap(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
    }

    #[test]
    fn remove_at_drops_the_element() {
        assert_eq!(remove_at(&[1, 2, 3], 1), vec![1, 3]);
    }

    #[test]
    fn remove_at_out_of_bounds_is_a_no_op() {
        assert_eq!(remove_at(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert_eq!(remove_at::<i32>(&[], 0), Vec::<i32>::new());
    }

    #[test]
    fn upsert_appends_new_keys() {
        let items = vec![("a", 1), ("b", 2)];
        let out = upsert_by_key(&items, |e| e.0, ("c", 3));
        assert_eq!(out, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn upsert_replaces_existing_key_and_moves_it_last() {
        let items = vec![("a", 1), ("b", 2), ("c", 3)];
        let out = upsert_by_key(&items, |e| e.0, ("a", 9));
        assert_eq!(out, vec![("b", 2), ("c", 3), ("a", 9)]);
    }

    #[test]
    fn upsert_never_duplicates_a_key() {
        let mut items = vec![("a", 1)];
        for value in 0..5 {
            items = upsert_by_key(&items, |e| e.0, ("a", value));
        }
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], ("a", 4));
    }
}
