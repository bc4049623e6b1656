//! # Creational Patterns: Abstract Factory & Builder
//!
//! This crate contains two independent pattern examples.
//!
//! ## Patterns Covered
//!
//! 1. **Abstract Factory**
//!    - `Shape` capability with four stateless variants
//!    - Two factory families (plain, rounded) behind `AbstractShapeFactory`
//!    - `FactoryProducer` picking a family at runtime
//!
//! 2. **Builder**
//!    - `Item` / `Packaging` capabilities implemented by leaf variants
//!    - `Meal` aggregate with an on-demand total
//!    - `MealBuilder` assembling predefined meals
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_abstract_factory
//! cargo run --bin p2_builder
//! ```
//!
//! ## Quick Look
//!
//! ```
//! use gof_creational::{FactoryProducer, MealBuilder};
//!
//! let factory = FactoryProducer::get_factory(true);
//! let shape = factory.get_shape("square").unwrap();
//! assert_eq!(shape.render(), "Drawing RoundedSquare...");
//! assert!(factory.get_shape("triangle").is_none());
//!
//! let meal = MealBuilder::new().prepare_non_veg_meal();
//! assert_eq!(meal.total_price(), 85.5);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod item;
pub mod logging;
pub mod meal;
pub mod packaging;
pub mod shape;

pub use builder::MealBuilder;
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use factory::{AbstractShapeFactory, FactoryProducer, RoundedShapeFactory, ShapeFactory, ShapeFamily};
pub use item::{Category, ChickenBurger, Coke, Item, Pepsi, VegBurger};
pub use meal::Meal;
pub use packaging::{Bottle, Packaging, Wrapper};
pub use shape::{Rectangle, RoundedRectangle, RoundedSquare, Shape, ShapeKind, ShapeType, Square};
