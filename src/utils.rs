use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Pos {
    /// the 8 cells of the moore neighborhood, excluding `self`.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_are_the_moore_neighborhood() {
        let center = pos!(4, -7);
        let neighbors: HashSet<Pos> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for n in &neighbors {
            let d = *n - center;
            assert!(d.row.abs() <= 1 && d.col.abs() <= 1);
        }
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![pos!(1, 0), pos!(0, 2), pos!(0, 1), pos!(-1, 5)];
        cells.sort();
        assert_eq!(cells, vec![pos!(-1, 5), pos!(0, 1), pos!(0, 2), pos!(1, 0)]);
    }
}
