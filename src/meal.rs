// Pattern 2: Builder - the product
// A meal is an ordered bag of items. The total is folded on every call.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

use crate::item::Item;

#[derive(Default)]
pub struct Meal {
    items: Vec<Box<dyn Item>>,
}

impl Meal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends as-is: duplicates are kept, nothing is rejected.
    pub fn add_item(&mut self, item: impl Item + 'static) {
        self.push(Box::new(item));
    }

    pub(crate) fn push(&mut self, item: Box<dyn Item>) {
        trace!(item = %item.name(), price = item.price(), "adding item");
        self.items.push(item);
    }

    /// Sum of item prices; `0.0` for an empty meal.
    pub fn total_price(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| total + item.price())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Item + 'static)> + '_ {
        self.items.iter().map(|item| &**item)
    }

    /// One line per item, in insertion order.
    pub fn item_lines(&self) -> Vec<String> {
        self.iter()
            .map(|item| {
                format!(
                    "Item: {}, Packaging: {}, Price: {:?}",
                    item.name(),
                    item.packaging().pack(),
                    item.price()
                )
            })
            .collect()
    }

    pub fn show_items_to(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in self.item_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn show_items(&self) -> io::Result<()> {
        self.show_items_to(&mut io::stdout().lock())
    }
}

impl fmt::Debug for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meal")
            .field("items", &self.iter().map(|item| item.name()).collect::<Vec<_>>())
            .field("total_price", &self.total_price())
            .finish()
    }
}

impl Extend<Box<dyn Item>> for Meal {
    fn extend<I: IntoIterator<Item = Box<dyn Item>>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl FromIterator<Box<dyn Item>> for Meal {
    fn from_iter<I: IntoIterator<Item = Box<dyn Item>>>(iter: I) -> Self {
        let mut meal = Meal::new();
        meal.extend(iter);
        meal
    }
}
