use std::env;
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use chrono::{FixedOffset, TimeZone};
use rand::seq::IndexedRandom;
use rand::RngExt;
use rust_decimal::Decimal;

use transaction_dashboard::models::TransactionRecord;

const CATEGORIES: [&str; 5] = [
    "men's clothing",
    "women's clothing",
    "jewelery",
    "electronics",
    "home & kitchen"
];

const NOUNS: [&str; 8] = [
    "Jacket", "Backpack", "Monitor", "Ring", "Sandal", "Shirt", "Hard Drive", "Earrings"
];

const ADJECTIVES: [&str; 6] = ["Premium", "Classic", "Portable", "Slim", "Vintage", "Everyday"];

struct GeneratorConfig {
    num_records: usize,
    output_path: String
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|value| value.parse().ok()).unwrap_or(60);

        Self {
            num_records,
            output_path: "samples/generated_products.json".to_string()
        }
    }
}

fn main() -> Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} records in {}...",
        config.num_records, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let mut rng = rand::rng();
    let timezone = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let mut records = Vec::with_capacity(config.num_records);

    for id in 1..=config.num_records as u32 {
        let adjective = ADJECTIVES.choose(&mut rng).unwrap();
        let noun = NOUNS.choose(&mut rng).unwrap();

        let date_of_sale = timezone
            .with_ymd_and_hms(
                rng.random_range(2021..=2022),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60)
            )
            .single()
            .unwrap();

        records.push(TransactionRecord {
            id,
            title: format!("{adjective} {noun}"),
            description: format!("{adjective} {noun} from the generated catalog"),
            price: Decimal::new(rng.random_range(100..=120_000), 2),
            category: CATEGORIES.choose(&mut rng).unwrap().to_string(),
            sold: rng.random_bool(0.65),
            date_of_sale,
            image: format!("https://example.com/images/{id}.jpg")
        });
    }

    let file = File::create(&config.output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

    println!("Generation complete.");

    Ok(())
}
