use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Position or size on the grid, `Dims(column, row)`.
///
/// Columns grow to the right and rows grow downwards, so `Dims(0, 0)` is the
/// top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl Neg for Dims {
    type Output = Dims;

    fn neg(self) -> Dims {
        Dims(-self.0, -self.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Dims(1, 2) + Dims(3, -1), Dims(4, 1));
        assert_eq!(Dims(1, 2) - Dims(3, -1), Dims(-2, 3));
        assert_eq!(Dims(2, 3) * 2, Dims(4, 6));
        assert_eq!(-Dims(1, -1), Dims(-1, 1));
        assert!(Dims::ZERO.all_non_negative());
        assert!(!Dims(0, -1).all_non_negative());
        assert_eq!(Dims(3, -2).to_string(), "(3, -2)");
    }
}
