//! Generalized N-dimensional vector algebra.
//!
//! The design is non-destructive: every operation returns a new [`Vector`]
//! and never mutates its operands. The implementation is generalized over
//! any number of dimensions rather than specialized for 2D/3D, trading a
//! little compactness for uniformity.

use crate::error::{Error, Result};

/// Length threshold below which a raw direction is treated as zero
/// by [`Vector::normalize_direction`].
const DIRECTION_EPSILON: f32 = 1e-5;

/// An ordered, fixed-length sequence of real numbers.
///
/// Binary operations require operand dimensions to match exactly and
/// surface [`Error::DimensionMismatch`] otherwise; the cross product is
/// defined for 3-dimensional vectors only.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    elements: Vec<f32>,
}

impl Vector {
    /// Creates a vector from its elements.
    pub fn new(elements: Vec<f32>) -> Self {
        Self { elements }
    }

    /// Creates a 3-dimensional vector.
    pub fn vec3(x: f32, y: f32, z: f32) -> Self {
        Self {
            elements: vec![x, y, z],
        }
    }

    /// Creates the zero vector of the given dimension.
    pub fn zero(dimensions: usize) -> Self {
        Self {
            elements: vec![0.0; dimensions],
        }
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.elements.len()
    }

    /// The raw elements in order.
    pub fn elements(&self) -> &[f32] {
        &self.elements
    }

    /// First component. Panics if the vector is 0-dimensional.
    pub fn x(&self) -> f32 {
        self.elements[0]
    }

    /// Second component. Panics if the vector has fewer than 2 dimensions.
    pub fn y(&self) -> f32 {
        self.elements[1]
    }

    /// Third component. Panics if the vector has fewer than 3 dimensions.
    pub fn z(&self) -> f32 {
        self.elements[2]
    }

    /// Fourth component. Panics if the vector has fewer than 4 dimensions.
    pub fn w(&self) -> f32 {
        self.elements[3]
    }

    fn check_dimensions(&self, other: &Vector) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Operands must have the same dimension.
    pub fn add(&self, v: &Vector) -> Result<Vector> {
        self.check_dimensions(v)?;
        Ok(Vector::new(
            self.elements
                .iter()
                .zip(&v.elements)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Element-wise difference. Operands must have the same dimension.
    pub fn subtract(&self, v: &Vector) -> Result<Vector> {
        self.check_dimensions(v)?;
        Ok(Vector::new(
            self.elements
                .iter()
                .zip(&v.elements)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Scales every element by `s`.
    pub fn multiply(&self, s: f32) -> Vector {
        Vector::new(self.elements.iter().map(|a| a * s).collect())
    }

    /// Divides every element by `s`.
    pub fn divide(&self, s: f32) -> Vector {
        Vector::new(self.elements.iter().map(|a| a / s).collect())
    }

    /// Dot product. Operands must have the same dimension.
    pub fn dot(&self, v: &Vector) -> Result<f32> {
        self.check_dimensions(v)?;
        Ok(self
            .elements
            .iter()
            .zip(&v.elements)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cross product. Both operands must be exactly 3-dimensional.
    pub fn cross(&self, v: &Vector) -> Result<Vector> {
        if self.dimensions() != 3 {
            return Err(Error::InvalidDimension {
                expected: 3,
                actual: self.dimensions(),
            });
        }
        if v.dimensions() != 3 {
            return Err(Error::InvalidDimension {
                expected: 3,
                actual: v.dimensions(),
            });
        }

        Ok(Vector::vec3(
            self.y() * v.z() - self.z() * v.y(),
            self.z() * v.x() - self.x() * v.z(),
            self.x() * v.y() - self.y() * v.x(),
        ))
    }

    /// Euclidean length, `sqrt(self . self)`.
    pub fn magnitude(&self) -> f32 {
        self.elements.iter().map(|a| a * a).sum::<f32>().sqrt()
    }

    /// The unit-length vector in this direction.
    ///
    /// There is no zero-length guard on this path: dividing a zero vector
    /// by its magnitude yields NaN components. Callers must not pass
    /// degenerate vectors here; [`Vector::normalize_direction`] is the
    /// guarded variant for lighting directions.
    pub fn unit(&self) -> Vector {
        self.divide(self.magnitude())
    }

    /// Guarded normalization for raw 3-component lighting directions.
    ///
    /// Returns the zero vector when the direction's length is below a
    /// small epsilon instead of dividing by near-zero.
    pub fn normalize_direction(direction: [f32; 3]) -> Vector {
        let [x, y, z] = direction;
        let length = (x * x + y * y + z * z).sqrt();
        if length > DIRECTION_EPSILON {
            Vector::vec3(x / length, y / length, z / length)
        } else {
            Vector::vec3(0.0, 0.0, 0.0)
        }
    }

    /// Projection of `self` onto `v`: `v.unit * (self . v.unit)`.
    pub fn projection(&self, v: &Vector) -> Result<Vector> {
        self.check_dimensions(v)?;
        let unit_v = v.unit();
        Ok(unit_v.multiply(self.dot(&unit_v)?))
    }
}

impl From<[f32; 3]> for Vector {
    fn from(elements: [f32; 3]) -> Self {
        Vector::new(elements.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_add_zero_is_identity() {
        let v = Vector::new(vec![1.5, -2.0, 3.25, 7.0]);
        let sum = v.add(&Vector::zero(4)).unwrap();
        assert_eq!(sum, v);
    }

    #[test]
    fn test_add_subtract_round_trip() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![-4.5, 0.25, 9.0]);
        let round_trip = a.add(&b).unwrap().subtract(&b).unwrap();
        for (got, want) in round_trip.elements().iter().zip(a.elements()) {
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::vec3(1.0, 2.0, 3.0);
        assert_eq!(
            a.add(&b),
            Err(Error::DimensionMismatch { left: 2, right: 3 })
        );
        assert_eq!(
            a.dot(&b),
            Err(Error::DimensionMismatch { left: 2, right: 3 })
        );
        assert!(a.subtract(&b).is_err());
        assert!(a.projection(&b).is_err());
    }

    #[test]
    fn test_cross_requires_3d() {
        let a = Vector::new(vec![1.0, 2.0, 3.0, 4.0]);
        let b = Vector::vec3(1.0, 0.0, 0.0);
        assert_eq!(
            a.cross(&b),
            Err(Error::InvalidDimension {
                expected: 3,
                actual: 4
            })
        );
        assert!(b.cross(&a).is_err());
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector::vec3(1.0, 2.0, 3.0);
        let b = Vector::vec3(-4.0, 5.0, 0.5);
        let c = a.cross(&b).unwrap();
        assert!(a.dot(&c).unwrap().abs() < EPSILON * 10.0);
        assert!(b.dot(&c).unwrap().abs() < EPSILON * 10.0);
    }

    #[test]
    fn test_cross_basis() {
        let x = Vector::vec3(1.0, 0.0, 0.0);
        let y = Vector::vec3(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y).unwrap(), Vector::vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_magnitude_and_unit() {
        let v = Vector::vec3(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        let u = v.unit();
        assert!((u.magnitude() - 1.0).abs() < EPSILON);
        assert!((u.x() - 0.6).abs() < EPSILON);
        assert!((u.y() - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_projection() {
        // Projecting (2, 2, 0) onto the x axis keeps only the x component.
        let v = Vector::vec3(2.0, 2.0, 0.0);
        let axis = Vector::vec3(10.0, 0.0, 0.0);
        let p = v.projection(&axis).unwrap();
        assert!((p.x() - 2.0).abs() < EPSILON);
        assert!(p.y().abs() < EPSILON);
        assert!(p.z().abs() < EPSILON);
    }

    #[test]
    fn test_normalize_direction_guard() {
        let zero = Vector::normalize_direction([0.0, 0.0, 0.0]);
        assert_eq!(zero, Vector::vec3(0.0, 0.0, 0.0));

        let tiny = Vector::normalize_direction([1e-7, 0.0, 0.0]);
        assert_eq!(tiny, Vector::vec3(0.0, 0.0, 0.0));

        let unit = Vector::normalize_direction([0.0, 0.0, 4.0]);
        assert_eq!(unit, Vector::vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_multiply_divide() {
        let v = Vector::new(vec![1.0, -2.0]);
        assert_eq!(v.multiply(2.0), Vector::new(vec![2.0, -4.0]));
        assert_eq!(v.divide(2.0), Vector::new(vec![0.5, -1.0]));
    }
}
