//! A square, row-major grid container.

use std::ops::{Index, IndexMut};

use crate::Position;

/// A `size × size` grid of values stored in row-major order.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Grid, Position};
///
/// let mut grid = Grid::new(3, '.');
/// grid[Position::new(1, 2)] = 'A';
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&'A'));
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn new(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position in row-major order.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let cells = positions(size).map(&mut f).collect();
        Self { size, cells }
    }

    /// Returns the side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the value at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.offset(pos)])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            let offset = self.offset(pos);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        positions(self.size)
    }

    /// Iterates over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks` valid for an empty grid, which has no cells anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Maps every value into a new grid of the same size.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn offset(&self, pos: Position) -> usize {
        pos.row() * self.size + pos.col()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(self.contains(pos), "position {pos} is outside a grid of size {}", self.size);
        &self.cells[self.offset(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(self.contains(pos), "position {pos} is outside a grid of size {}", self.size);
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

fn positions(size: usize) -> impl Iterator<Item = Position> {
    (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, |pos| pos.row() * 10 + pos.col());
        let rows: Vec<_> = grid.rows().map(<[usize]>::to_vec).collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![10, 11, 12], vec![20, 21, 22]]);
    }

    #[test]
    fn test_index_and_mutation() {
        let mut grid = Grid::new(2, 0);
        grid[Position::new(1, 0)] = 7;
        *grid.get_mut(Position::new(0, 1)).unwrap() = 3;
        assert_eq!(grid[Position::new(1, 0)], 7);
        assert_eq!(grid[Position::new(0, 1)], 3);
        assert!(grid.get_mut(Position::new(2, 0)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 0);
        let _ = grid[Position::new(0, 2)];
    }

    #[test]
    fn test_map_and_iter() {
        let grid = Grid::from_fn(2, |pos| pos.col() == 1);
        let mapped = grid.map(|&active| if active { '*' } else { '#' });
        let collected: Vec<_> = mapped.iter().map(|(_, c)| *c).collect();
        assert_eq!(collected, vec!['#', '*', '#', '*']);
        assert_eq!(grid.positions().count(), 4);
    }
}
