// Pattern 1: Abstract Factory - the products
// Shapes are stateless; a variant's identity is its `ShapeKind`.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// Product capability
// ============================================================================

/// Variant tag carried by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Rectangle,
    RoundedSquare,
    RoundedRectangle,
}

impl ShapeKind {
    pub fn is_rounded(self) -> bool {
        matches!(self, ShapeKind::RoundedSquare | ShapeKind::RoundedRectangle)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedSquare => "RoundedSquare",
            ShapeKind::RoundedRectangle => "RoundedRectangle",
        };
        f.write_str(name)
    }
}

/// Anything a shape factory can hand out.
pub trait Shape: Send + Sync {
    fn kind(&self) -> ShapeKind;

    /// The line `draw` writes.
    fn render(&self) -> String {
        format!("Drawing {}...", self.kind())
    }

    fn draw_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    fn draw(&self) -> io::Result<()> {
        self.draw_to(&mut io::stdout().lock())
    }
}

// ============================================================================
// Concrete products
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;
impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;
impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedSquare;
impl Shape for RoundedSquare {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RoundedSquare
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedRectangle;
impl Shape for RoundedRectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RoundedRectangle
    }
}

// ============================================================================
// Lookup key
// ============================================================================

/// The shape kinds a factory knows how to build, independent of family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Square,
    Rectangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 2] = [ShapeType::Square, ShapeType::Rectangle];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Square => "SQUARE",
            ShapeType::Rectangle => "RECTANGLE",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = Error;

    /// Compared after Unicode upper-casing, no trimming: `" square"` is not a shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        ShapeType::ALL
            .into_iter()
            .find(|ty| upper == ty.as_str())
            .ok_or_else(|| Error::unknown_shape(s))
    }
}
