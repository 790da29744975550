//! Array-backed binary heap helpers.
//!
//! Index `i` has children at `2i + 1` and `2i + 2`. Both the snapshot cursor
//! and [`Tree::to_heap`](crate::Tree::to_heap) lay nodes out this way.

/// Moves `values[index]` down until neither child is `less` than it.
pub fn sift_down_by<E, F>(values: &mut [E], mut index: usize, less: &F)
where
    F: Fn(&E, &E) -> bool,
{
    while index < values.len() {
        let left_idx = 2 * index + 1;
        let right_idx = 2 * index + 2;
        if left_idx >= values.len() {
            break;
        }

        let mut smallest_idx = index;
        if less(&values[left_idx], &values[smallest_idx]) {
            smallest_idx = left_idx;
        }
        if right_idx < values.len() && less(&values[right_idx], &values[smallest_idx]) {
            smallest_idx = right_idx;
        }

        if smallest_idx == index {
            break;
        }
        values.swap(index, smallest_idx);
        index = smallest_idx;
    }
}

/// Bottom-up heap construction: sift down every internal index, last first.
pub fn heapify_by<E, F>(values: &mut [E], less: F)
where
    F: Fn(&E, &E) -> bool,
{
    for index in (0..values.len() / 2).rev() {
        sift_down_by(values, index, &less);
    }
}

pub fn is_min_heap<T: PartialOrd>(values: &[T]) -> bool {
    (0..values.len()).all(|i| {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter_map(|child| values.get(child))
            .all(|child| values[i] <= *child)
    })
}
