// Pattern 1: Abstract Factory - the factories
// Each family builds its own flavour of every `ShapeType`; `FactoryProducer`
// is the "factory of factories".

use tracing::{debug, trace};

use crate::shape::{Rectangle, RoundedRectangle, RoundedSquare, Shape, ShapeType, Square};

/// The two product families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    Plain,
    Rounded,
}

impl ShapeFamily {
    pub fn from_rounded(rounded: bool) -> Self {
        if rounded {
            ShapeFamily::Rounded
        } else {
            ShapeFamily::Plain
        }
    }
}

pub trait AbstractShapeFactory: Send + Sync {
    fn family(&self) -> ShapeFamily;

    /// Build this family's version of `ty`.
    fn create(&self, ty: ShapeType) -> Box<dyn Shape>;

    /// Look a shape up by name, ignoring case (Unicode upper-casing).
    ///
    /// Names other than `SQUARE` and `RECTANGLE` give `None`, never an error.
    fn get_shape(&self, name: &str) -> Option<Box<dyn Shape>> {
        match name.parse::<ShapeType>() {
            Ok(ty) => {
                trace!(family = ?self.family(), shape = %ty, "creating shape");
                Some(self.create(ty))
            }
            Err(err) => {
                debug!(family = ?self.family(), %err, "no shape for name");
                None
            }
        }
    }
}

// ============================================================================
// Concrete factories
// ============================================================================

/// Builds [`Square`] and [`Rectangle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl AbstractShapeFactory for ShapeFactory {
    fn family(&self) -> ShapeFamily {
        ShapeFamily::Plain
    }

    fn create(&self, ty: ShapeType) -> Box<dyn Shape> {
        match ty {
            ShapeType::Square => Box::new(Square),
            ShapeType::Rectangle => Box::new(Rectangle),
        }
    }
}

/// Builds [`RoundedSquare`] and [`RoundedRectangle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedShapeFactory;

impl AbstractShapeFactory for RoundedShapeFactory {
    fn family(&self) -> ShapeFamily {
        ShapeFamily::Rounded
    }

    fn create(&self, ty: ShapeType) -> Box<dyn Shape> {
        match ty {
            ShapeType::Square => Box::new(RoundedSquare),
            ShapeType::Rectangle => Box::new(RoundedRectangle),
        }
    }
}

// ============================================================================
// Factory selector
// ============================================================================

/// Hands out a fresh factory on every call; nothing is cached.
pub struct FactoryProducer;

impl FactoryProducer {
    pub fn get_factory(rounded: bool) -> Box<dyn AbstractShapeFactory> {
        Self::for_family(ShapeFamily::from_rounded(rounded))
    }

    pub fn for_family(family: ShapeFamily) -> Box<dyn AbstractShapeFactory> {
        match family {
            ShapeFamily::Plain => Box::new(ShapeFactory),
            ShapeFamily::Rounded => Box::new(RoundedShapeFactory),
        }
    }
}
