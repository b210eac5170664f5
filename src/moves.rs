//! Move ordering and the legal move list

use crate::WIDTH;

/// Returns the columns ordered from the middle outwards, as the middle
/// columns are often better moves and searching them first prunes more of the tree.
///
/// Columns equally far from the centre are ordered lowest index first.
pub const fn move_order() -> [usize; WIDTH] {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = i;
        i += 1;
    }

    // insertion sort on (distance from centre, column); distances are doubled
    // to stay integral when the centre falls between two columns
    let mut i = 1;
    while i < WIDTH {
        let column = order[i];
        let mut pos = i;
        while pos > 0 && centre_distance(order[pos - 1]) > centre_distance(column) {
            order[pos] = order[pos - 1];
            pos -= 1;
        }
        order[pos] = column;
        i += 1;
    }
    order
}

const fn centre_distance(column: usize) -> usize {
    let doubled = 2 * column;
    if doubled + 1 > WIDTH {
        doubled + 1 - WIDTH
    } else {
        WIDTH - 1 - doubled
    }
}

/// The columns that can still be played, in [`move_order`]
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    next: usize,
    columns: [usize; WIDTH],
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            columns: [0; WIDTH],
        }
    }

    /// Appends a column, callers push in search order
    pub fn push(&mut self, column: usize) {
        self.columns[self.size] = column;
        self.size += 1;
    }

    /// Number of columns not yet yielded
    pub fn len(&self) -> usize {
        self.size - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, column: usize) -> bool {
        self.columns[self.next..self.size].contains(&column)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns[self.next..self.size]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for MoveList {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            return None;
        }
        self.next += 1;
        Some(self.columns[self.next - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for MoveList {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_first_order() {
        assert_eq!(move_order(), [5, 6, 4, 7, 3, 8, 2, 9, 1, 10, 0, 11]);
    }

    #[test]
    fn move_list_yields_in_push_order() {
        let mut moves = MoveList::new();
        for &column in [5, 6, 0].iter() {
            moves.push(column);
        }
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(0));
        assert!(!moves.contains(4));
        assert_eq!(moves.collect::<Vec<_>>(), vec![5, 6, 0]);
    }
}
