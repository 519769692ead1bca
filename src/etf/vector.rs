//! Two-component direction vectors stored in the tangent field.

use std::ops::{Add, Mul, Neg};

/// 2D vector in image coordinates (`x` to the right, `y` down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector, used for cells without a defined direction.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns the unit vector in the same direction, or zero when the norm
    /// vanishes.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let n = self.norm();
        if n > 0.0 && n.is_finite() {
            Vec2::new(self.x / n, self.y / n)
        } else {
            Vec2::ZERO
        }
    }

    /// Rotates by +90 degrees: `(x, y) -> (-y, x)`.
    #[inline]
    pub fn rotate_ccw(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Rotates by -90 degrees: `(x, y) -> (y, -x)`.
    #[inline]
    pub fn rotate_cw(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
