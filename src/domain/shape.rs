//! Shapes and the area store
//!
//! `ShapeStore` only knows the `Shape` abstraction, so adding a new shape
//! means adding a type, not editing the store.

use std::f64::consts::PI;
use std::fmt::Debug;

/// Anything with an area.
pub trait Shape: Debug + Send + Sync {
    /// Short lowercase name, used in log output.
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub height: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.height * self.width
    }
}

/// Equilateral triangle with side `length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub length: f64,
}

impl Triangle {
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn area(&self) -> f64 {
        self.length * self.length * 3f64.sqrt() / 4.0
    }
}

/// Holds shapes and sums their areas on demand.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeStore {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    /// Total area, recomputed on every call. Empty store yields `0`.
    pub fn calculate_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    #[test]
    fn given_circle_when_area_then_pi_r_squared() {
        let circle = Circle::new(5.0);
        assert_eq!(circle.radius, 5.0);
        assert!((circle.area() - PI * 25.0).abs() < EPSILON);
    }

    #[test]
    fn given_zero_dimensions_when_area_then_zero() {
        assert_eq!(Circle::new(0.0).area(), 0.0);
        assert_eq!(Rectangle::new(0.0, 5.0).area(), 0.0);
        assert_eq!(Triangle::new(0.0).area(), 0.0);
    }

    #[test]
    fn given_decimal_rectangle_when_area_then_exact_product() {
        assert_eq!(Rectangle::new(2.5, 3.2).area(), 8.0);
        assert_eq!(Rectangle::new(3.0, 3.0).area(), 9.0);
    }

    #[test]
    fn given_triangle_when_area_then_equilateral_formula() {
        let expected = 4.5 * 4.5 * 3f64.sqrt() / 4.0;
        assert!((Triangle::new(4.5).area() - expected).abs() < EPSILON);
    }

    #[test]
    fn given_empty_store_when_calculating_then_zero() {
        let store = ShapeStore::new(vec![]);
        assert_eq!(store.calculate_area(), 0.0);
        assert!(store.shapes().is_empty());
    }
}
