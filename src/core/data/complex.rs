use std::ops::{Add, Mul};

// Plain f64 pair instead of the num-complex crate; the engine only needs
// the quadratic step and magnitude comparisons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

pub const COMPLEX_ZERO: Complex = Complex {
    real: 0.0,
    imag: 0.0,
};

impl Complex {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One escape-time iteration: `z² + c`.
    #[must_use]
    pub fn squared_plus(self, c: Complex) -> Self {
        self * self + c
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
