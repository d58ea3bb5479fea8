//! Perimeters of simple shapes.

use crate::{
    error::{Error, InvalidDimension},
    fmt::{fmt_num, FormatOptions},
};
use std::f64::consts::PI;

/// A shape whose perimeter can be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Triangle { a: f64, b: f64, c: f64 },
    Circle { radius: f64 },
}

impl Shape {
    /// Checks that the dimensions describe a real shape.
    fn validate(&self) -> Result<(), Error> {
        let lengths = match *self {
            Shape::Rectangle { width, height } => vec![width, height],
            Shape::Square { side } => vec![side],
            Shape::Triangle { a, b, c } => vec![a, b, c],
            Shape::Circle { radius } => vec![radius],
        };
        if lengths.iter().any(|length| *length <= 0.0 || !length.is_finite()) {
            return Err(Error::spanless(InvalidDimension {
                reason: "Every length must be a positive number.",
            }));
        }

        if let Shape::Triangle { a, b, c } = *self {
            if a + b <= c || a + c <= b || b + c <= a {
                return Err(Error::spanless(InvalidDimension {
                    reason: "Each side of a triangle must be shorter than the other two combined.",
                }));
            }
        }
        Ok(())
    }

    /// Returns the perimeter of the shape.
    pub fn perimeter(&self) -> Result<f64, Error> {
        self.validate()?;
        Ok(match *self {
            Shape::Rectangle { width, height } => 2.0 * (width + height),
            Shape::Square { side } => 4.0 * side,
            Shape::Triangle { a, b, c } => a + b + c,
            Shape::Circle { radius } => 2.0 * PI * radius,
        })
    }

    /// Computes the perimeter and shows how it was found.
    pub fn describe(&self, options: &FormatOptions) -> Result<String, Error> {
        let perimeter = options.fixed(self.perimeter()?);
        Ok(match *self {
            Shape::Rectangle { width, height } => format!(
                "Perimeter of rectangle: 2({} + {}) = {}",
                fmt_num(width),
                fmt_num(height),
                perimeter,
            ),
            Shape::Square { side } => format!("Perimeter of square: 4 × {} = {}", fmt_num(side), perimeter),
            Shape::Triangle { a, b, c } => format!(
                "Perimeter of triangle: {} + {} + {} = {}",
                fmt_num(a),
                fmt_num(b),
                fmt_num(c),
                perimeter,
            ),
            Shape::Circle { radius } => {
                format!("Circumference of circle: 2π × {} ≈ {}", fmt_num(radius), perimeter)
            },
        })
    }
}
