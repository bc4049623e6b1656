// Pattern 2: Builder
// Builds the two predefined meals and prints their contents and totals.

use std::io;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use gof_creational::config::DEFAULT_CONFIG_FILE;
use gof_creational::{logging, DemoConfig, Meal, MealBuilder};

fn print_meal(config: &DemoConfig, title: &str, meal: &Meal) -> io::Result<()> {
    if config.color {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    meal.show_items()?;
    println!("Price: {:?}", meal.total_price());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .context("loading demo config")?;
    logging::init(&config)?;

    let meal_builder = MealBuilder::new();

    let veg_meal = meal_builder.prepare_veg_meal();
    print_meal(&config, "Veg meal:", &veg_meal)?;

    let non_veg_meal = meal_builder.prepare_non_veg_meal();
    print_meal(&config, "Non veg meal:", &non_veg_meal)?;

    Ok(())
}
