// Pattern 2: Builder - the parts
// Every leaf item implements `Item` directly. What it shares with its siblings
// (the packaging) comes from its `Category`, not from a parent type.

use crate::packaging::{Bottle, Packaging, Wrapper};

/// Something that can go into a [`Meal`](crate::Meal).
pub trait Item: Send + Sync {
    fn name(&self) -> String;
    fn packaging(&self) -> Box<dyn Packaging>;
    /// Never negative.
    fn price(&self) -> f64;
}

/// Menu section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Burger,
    ColdDrink,
}

impl Category {
    /// Default packaging for everything in this category.
    pub fn packaging(self) -> Box<dyn Packaging> {
        match self {
            Category::Burger => Box::new(Wrapper),
            Category::ColdDrink => Box::new(Bottle),
        }
    }
}

// ============================================================================
// Burgers
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct VegBurger;

impl Item for VegBurger {
    fn name(&self) -> String {
        "Veggie burger".to_string()
    }

    fn packaging(&self) -> Box<dyn Packaging> {
        Category::Burger.packaging()
    }

    fn price(&self) -> f64 {
        25.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChickenBurger;

impl Item for ChickenBurger {
    fn name(&self) -> String {
        "Chicken burger".to_string()
    }

    fn packaging(&self) -> Box<dyn Packaging> {
        Category::Burger.packaging()
    }

    fn price(&self) -> f64 {
        50.5
    }
}

// ============================================================================
// Cold drinks
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Coke;

impl Item for Coke {
    fn name(&self) -> String {
        "Coke".to_string()
    }

    fn packaging(&self) -> Box<dyn Packaging> {
        Category::ColdDrink.packaging()
    }

    fn price(&self) -> f64 {
        30.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pepsi;

impl Item for Pepsi {
    fn name(&self) -> String {
        "Pepsi".to_string()
    }

    fn packaging(&self) -> Box<dyn Packaging> {
        Category::ColdDrink.packaging()
    }

    fn price(&self) -> f64 {
        35.0
    }
}
