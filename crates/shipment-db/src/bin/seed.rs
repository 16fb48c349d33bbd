//! # Seed Data Generator
//!
//! Populates the database with priced sample shipments for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 shipments (default)
//! cargo run -p shipment-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p shipment-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p shipment-db --bin seed -- --db ./data/shipments.db
//! ```
//!
//! Every sample goes through the same validate → price → store path as an
//! HTTP request, so seeded prices always match what the API would charge.

use std::env;

use shipment_core::{PricingEngine, ServiceError, ShipmentRequest, ShipmentService};
use shipment_db::{Database, DbConfig};

/// (name, address, country code) triples. Addresses follow
/// "street number, city postcode".
const PARTIES: &[(&str, &str, &str)] = &[
    ("Astrid", "Drottninggatan 12, Stockholm 11151", "SE"),
    ("Ola", "Karl Johans gate 5, Oslo 0154", "NO"),
    ("Mette", "Nyhavn 17, Copenhagen 1051", "DK"),
    ("Aino", "Mannerheimintie 3, Helsinki 00100", "FI"),
    ("Piotr", "Marszalkowska 84, Warszawa 00514", "PL"),
    ("Lena", "Unter den Linden 77, Berlin 10117", "DE"),
    ("Camille", "Rue de Rivoli 99, Paris 75001", "FR"),
    ("Mark", "Shevchenka street 45, Lviv 79000", "UA"),
    ("Iryna", "Queen street 34, Toronto 10", "CA"),
    ("Kenji", "Chuo dori 8, Tokyo 1040061", "JP"),
];

/// Weights spread across every band, including both band edges.
const WEIGHTS: &[f64] = &[0.5, 5.0, 10.9, 11.0, 25.0, 26.0, 50.0, 51.0, 234.4, 1000.0];

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "./shipments.db";

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SeedOptions {
    count: usize,
    db_path: String,
}

/// Parses the arguments after the program name.
///
/// Returns `Ok(None)` for `--help`, `Err` with a message for a bad value.
fn parse_args(args: &[String]) -> Result<Option<SeedOptions>, String> {
    let mut options = SeedOptions {
        count: DEFAULT_COUNT,
        db_path: DEFAULT_DB_PATH.to_string(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let raw = args.get(i + 1).ok_or("--count needs a value")?;
                options.count = raw
                    .parse()
                    .map_err(|_| format!("invalid --count value: '{}'", raw))?;
                i += 1;
            }
            "--db" | "-d" => {
                let raw = args.get(i + 1).ok_or("--db needs a value")?;
                options.db_path = raw.clone();
                i += 1;
            }
            "--help" | "-h" => return Ok(None),
            _ => {}
        }
        i += 1;
    }

    Ok(Some(options))
}

fn print_help() {
    println!("Shipment Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of shipments to generate (default: 200)");
    println!("  -d, --db <PATH>    Database file path (default: ./shipments.db)");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();

    let SeedOptions { count, db_path } = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    println!("🌱 Shipment Seed Data Generator");
    println!("===============================");
    println!("Database:  {}", db_path);
    println!("Shipments: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.shipments().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} shipments", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let service = ShipmentService::new(PricingEngine::default(), db.shipments());

    println!();
    println!("Generating shipments...");

    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut total_price = 0.0;

    for seed in 0..count {
        let request = sample_request(seed);

        match service.add_shipment(&request).await {
            Ok(priced) => {
                generated += 1;
                total_price += priced.price;
            }
            Err(ServiceError::Core(e)) => {
                eprintln!("Sample {} rejected: {}", seed, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if generated % 50 == 0 {
            println!("  Generated {} shipments...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} shipments in {:?}", generated, elapsed);
    println!("  Total price: {:.1}", total_price);
    println!("  Stored rows: {}", db.shipments().count().await?);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds a deterministic sample request from a seed.
fn sample_request(seed: usize) -> ShipmentRequest {
    let (from_name, from_address, from_country) = PARTIES[seed % PARTIES.len()];
    let (to_name, to_address, to_country) = PARTIES[(seed * 7 + 3) % PARTIES.len()];
    let weight = WEIGHTS[(seed / PARTIES.len()) % WEIGHTS.len()];

    ShipmentRequest {
        from_name: from_name.to_string(),
        from_email: format!("{}.{}@example.com", from_name.to_lowercase(), seed),
        from_address: from_address.to_string(),
        from_country_code: from_country.to_string(),
        to_name: to_name.to_string(),
        to_email: format!("{}@example.org", to_name.to_lowercase()),
        to_address: to_address.to_string(),
        to_country_code: to_country.to_string(),
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() {
        assert_eq!(
            parse_args(&[]),
            Ok(Some(SeedOptions {
                count: DEFAULT_COUNT,
                db_path: DEFAULT_DB_PATH.to_string(),
            }))
        );
    }

    #[test]
    fn test_count_and_db() {
        let options = parse_args(&args(&["-c", "50", "--db", "/tmp/seed.db"]))
            .unwrap()
            .unwrap();
        assert_eq!(options.count, 50);
        assert_eq!(options.db_path, "/tmp/seed.db");
    }

    #[test]
    fn test_invalid_count_is_an_error() {
        assert_eq!(
            parse_args(&args(&["--count", "lots"])),
            Err("invalid --count value: 'lots'".to_string())
        );
        assert!(parse_args(&args(&["--count"])).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["--count", "5", "-h"])), Ok(None));
    }

    #[test]
    fn test_samples_are_valid_requests() {
        let engine = PricingEngine::default();
        for seed in 0..PARTIES.len() * WEIGHTS.len() {
            assert!(engine.price(&sample_request(seed)).is_ok(), "sample {seed}");
        }
    }
}
