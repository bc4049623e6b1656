// Pattern 2: Builder - the director
// `MealBuilder` knows the fixed recipes; every call returns a brand-new meal.

use tracing::debug;

use crate::item::{ChickenBurger, Coke, Pepsi, VegBurger};
use crate::meal::Meal;

#[derive(Debug, Clone, Copy, Default)]
pub struct MealBuilder;

impl MealBuilder {
    pub fn new() -> Self {
        MealBuilder
    }

    /// Veggie burger, then a Coke.
    pub fn prepare_veg_meal(&self) -> Meal {
        let mut meal = Meal::new();
        meal.add_item(VegBurger);
        meal.add_item(Coke);
        debug!(items = meal.len(), total = meal.total_price(), "prepared veg meal");
        meal
    }

    /// Chicken burger, then a Pepsi.
    pub fn prepare_non_veg_meal(&self) -> Meal {
        let mut meal = Meal::new();
        meal.add_item(ChickenBurger);
        meal.add_item(Pepsi);
        debug!(items = meal.len(), total = meal.total_price(), "prepared non-veg meal");
        meal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use rayon::prelude::*;

    #[test]
    fn test_veg_meal() {
        let meal = MealBuilder::new().prepare_veg_meal();

        assert_eq!(meal.total_price(), 55.0);
        assert_eq!(
            meal.item_lines(),
            [
                "Item: Veggie burger, Packaging: Wrapper, Price: 25.0",
                "Item: Coke, Packaging: Bottle, Price: 30.0",
            ]
        );
    }

    #[test]
    fn test_non_veg_meal() {
        let meal = MealBuilder::new().prepare_non_veg_meal();

        assert_eq!(meal.total_price(), 85.5);
        assert_eq!(
            meal.item_lines(),
            [
                "Item: Chicken burger, Packaging: Wrapper, Price: 50.5",
                "Item: Pepsi, Packaging: Bottle, Price: 35.0",
            ]
        );
    }

    #[test]
    fn test_each_call_builds_a_new_meal() {
        let builder = MealBuilder::new();
        let mut first = builder.prepare_veg_meal();
        let second = builder.prepare_veg_meal();

        first.add_item(Pepsi);

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert_eq!(second.total_price(), 55.0);
    }

    #[test]
    fn test_parallel_builds_are_independent() {
        let builder = MealBuilder::new();

        let meals: Vec<Meal> = (0..64)
            .into_par_iter()
            .map(|i| {
                let mut meal = if i % 2 == 0 {
                    builder.prepare_veg_meal()
                } else {
                    builder.prepare_non_veg_meal()
                };
                for _ in 0..i % 3 {
                    meal.add_item(Coke);
                }
                meal
            })
            .collect();

        for (i, meal) in meals.iter().enumerate() {
            let base = if i % 2 == 0 { 55.0 } else { 85.5 };
            let extra = (i % 3) as f64 * Coke.price();
            assert_eq!(meal.len(), 2 + i % 3);
            assert_eq!(meal.total_price(), base + extra);
        }
    }
}
