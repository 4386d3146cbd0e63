//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `geodex_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use geodex_core::{Country, CountryService, InMemoryCountryRepository};

fn main() {
    println!("geodex_core version={}", geodex_core::core_version());

    let service = CountryService::new(InMemoryCountryRepository::new());
    let seed = [
        Country::new("GER", "Germany"),
        Country::new("FRA", "France"),
        Country::new("USA", "United States"),
    ];

    for country in &seed {
        if let Err(err) = service.add_country(country) {
            eprintln!("add {} failed: {err}", country.code);
            std::process::exit(1);
        }
    }

    let mut countries = match service.list_countries() {
        Ok(countries) => countries,
        Err(err) => {
            eprintln!("list failed: {err}");
            std::process::exit(1);
        }
    };
    countries.sort_by(|a, b| a.code.cmp(&b.code));

    for country in countries {
        println!("{} {}", country.code, country.name);
    }
}
