use std::ops::{Add, AddAssign, Sub};

/// Location (or displacement) on a canvas, in CSS pixels.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug, Default)]
pub struct Point(pub f64, pub f64);

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Point {
    /// Reflects the [`Point`] across the vertical centre line of a surface `width` pixels wide.
    pub fn mirror(&self, width: f64) -> Point {
        Point(width - self.0, self.1)
    }
}

/// Size of a drawing surface in CSS pixels.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Bounds {
        Bounds { width, height }
    }

    /// Centre of the surface.
    pub fn center(&self) -> Point {
        Point(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reflects_across_centre_line() {
        assert_eq!(Point(100.0, 40.0).mirror(800.0), Point(700.0, 40.0));
        assert_eq!(Point(400.0, 40.0).mirror(800.0), Point(400.0, 40.0));
    }

    #[test]
    fn centre_of_bounds() {
        assert_eq!(Bounds::new(1024.0, 768.0).center(), Point(512.0, 384.0));
    }
}
