//! 2D vector and rotation math.
//!
//! Coordinates are world units with `y` growing downwards (row order of the
//! level file), so a positive rotation turns clockwise on screen.

use std::ops::{Add, Mul, Neg, Sub};

/// Zero-length vector passed to [`Vec2::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVectorError;

/// A point or direction in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector pointing the same way.
    pub fn normalize(self) -> Result<Self, DegenerateVectorError> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(DegenerateVectorError);
        }
        Ok(self * (1.0 / len))
    }

    /// Components truncated toward zero, as grid cell coordinates.
    #[inline]
    pub fn trunc_cell(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Components rounded half away from zero.
    #[inline]
    pub fn round_cell(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Pure 2x2 rotation.
///
/// Only constructible through [`Rot2::from_degrees`] / [`Rot2::from_radians`],
/// so it is always orthonormal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot2 {
    a11: f32,
    a12: f32,
    a21: f32,
    a22: f32,
}

impl Rot2 {
    pub const IDENTITY: Rot2 = Rot2 {
        a11: 1.0,
        a12: 0.0,
        a21: 0.0,
        a22: 1.0,
    };

    /// Rotation by `radians`: `[cos, -sin; sin, cos]`.
    pub fn from_radians(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            a11: c,
            a12: -s,
            a21: s,
            a22: c,
        }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Matrix-vector product.
    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.a11 * v.x + self.a12 * v.y,
            self.a21 * v.x + self.a22 * v.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -3.0);
        assert_eq!(a + b, Vec2::new(1.5, -1.0));
        assert_eq!(a - b, Vec2::new(0.5, 5.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn rotate_zero_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(Rot2::from_degrees(0.0).apply(v), v);
        assert_eq!(Rot2::IDENTITY.apply(v), v);
    }

    #[test]
    fn rotating_twice_matches_double_angle() {
        let v = Vec2::new(0.3, -0.8);
        for deg in [-270.0f32, -90.0, -5.0, 0.0, 5.0, 33.3, 90.0, 135.0, 180.0] {
            let r = Rot2::from_degrees(deg);
            let twice = r.apply(r.apply(v));
            let double = Rot2::from_degrees(2.0 * deg).apply(v);
            assert!(close(twice, double), "angle {deg}: {twice:?} vs {double:?}");
        }
    }

    #[test]
    fn quarter_turn_of_up_points_along_positive_x() {
        let r = Rot2::from_degrees(90.0).apply(Vec2::new(0.0, -1.0));
        assert!(close(r, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.001, 0.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1e3, -2e3),
        ] {
            let n = v.normalize().unwrap();
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert_eq!(Vec2::ZERO.normalize(), Err(DegenerateVectorError));
    }

    #[test]
    fn cell_conversions_truncate_and_round() {
        let v = Vec2::new(4.6, -0.4);
        assert_eq!(v.trunc_cell(), (4, 0));
        assert_eq!(v.round_cell(), (5, 0));
        assert_eq!(Vec2::new(2.5, 3.49).round_cell(), (3, 3));
    }
}
