//! Angle units.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    f32::consts::PI,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle in some unit.
pub trait Angle: Copy {
    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;

    /// Returns the angle as [`Degrees`].
    fn as_degrees(self) -> Degrees {
        Degrees(self.degrees())
    }

    /// Returns the angle as [`Radians`].
    fn as_radians(self) -> Radians {
        Radians(self.radians())
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Angle for Degrees {
    fn degrees(self) -> f32 {
        self.0
    }

    fn radians(self) -> f32 {
        degrees_to_radians(self.0)
    }
}

impl Angle for Radians {
    fn degrees(self) -> f32 {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> f32 {
        self.0
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.as_radians()
    }
}

macro_rules! impl_angle_arithmetic {
    ($t:ident) => {
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $t {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $t {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            f32::abs_diff_eq(&a.0, &b.0, epsilon)
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            f32::relative_eq(&a.0, &b.0, epsilon, max_relative)
        });
    };
}

impl_angle_arithmetic!(Degrees);
impl_angle_arithmetic!(Radians);

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
