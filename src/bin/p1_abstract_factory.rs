// Pattern 1: Abstract Factory
// Asks both shape families for the configured shape names and draws whatever
// comes back. Unknown names are skipped.

use std::io;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use gof_creational::config::DEFAULT_CONFIG_FILE;
use gof_creational::{logging, AbstractShapeFactory, DemoConfig, FactoryProducer};

fn header(config: &DemoConfig, title: &str) {
    if config.color {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

fn draw_family(factory: &dyn AbstractShapeFactory, names: &[String]) -> io::Result<()> {
    for name in names {
        if let Some(shape) = factory.get_shape(name) {
            shape.draw()?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .context("loading demo config")?;
    logging::init(&config)?;

    header(&config, "=== Shape Factory ===");
    let shape_factory = FactoryProducer::get_factory(false);
    draw_family(&*shape_factory, &config.shapes)?;
    println!();

    header(&config, "=== Rounded Shape Factory ===");
    let rounded_factory = FactoryProducer::get_factory(true);
    draw_family(&*rounded_factory, &config.shapes)?;

    Ok(())
}
