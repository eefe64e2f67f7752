//! # Seed Data Generator
//!
//! Populates the database with a small catalog of well-known weapons for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by ARMORY_DATABASE_PATH (default: armory.db)
//! cargo run -p armory-db --bin seed
//!
//! # Specify database path
//! cargo run -p armory-db --bin seed -- --db ./data/armory.db
//!
//! # More detail
//! RUST_LOG=debug cargo run -p armory-db --bin seed
//! ```
//!
//! Every weapon goes through `WeaponService::create`, so seeded rows pass
//! the same validation as any other. Weapons marked `frozen` below are
//! created unmodifiable. The first failed create aborts the run with a
//! non-zero exit.

use std::env;

use armory_core::{CreateWeaponRequest, WeaponResult, WeaponService, WeaponStore, Weight};
use armory_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One seeded weapon.
struct SeedWeapon {
    name: &'static str,
    examine: &'static str,
    primary: &'static str,
    secondary: &'static str,
    attack_lvl: i32,
    strength_lvl: i32,
    attack_speed: i32,
    /// stab, slash, crush
    attack: [i32; 3],
    melee_strength: i32,
    weight: i64,
    exchange_price: Option<i32>,
    high_alch_price: Option<i32>,
    frozen: bool,
}

const CATALOG: &[SeedWeapon] = &[
    SeedWeapon {
        name: "Bronze dagger",
        examine: "Short but pointy.",
        primary: "Stab",
        secondary: "Slash",
        attack_lvl: 1,
        strength_lvl: 1,
        attack_speed: 4,
        attack: [4, 2, -4],
        melee_strength: 3,
        weight: 453,
        exchange_price: Some(40),
        high_alch_price: Some(6),
        frozen: true,
    },
    SeedWeapon {
        name: "Rune scimitar",
        examine: "A vicious, curved sword.",
        primary: "Slash",
        secondary: "Stab",
        attack_lvl: 40,
        strength_lvl: 1,
        attack_speed: 4,
        attack: [7, 45, -2],
        melee_strength: 44,
        weight: 1814,
        exchange_price: Some(15_000),
        high_alch_price: Some(15_360),
        frozen: false,
    },
    SeedWeapon {
        name: "Dragon scimitar",
        examine: "A vicious, curved sword.",
        primary: "Slash",
        secondary: "Stab",
        attack_lvl: 60,
        strength_lvl: 1,
        attack_speed: 4,
        attack: [8, 67, -2],
        melee_strength: 66,
        weight: 1814,
        exchange_price: Some(59_000),
        high_alch_price: Some(60_000),
        frozen: false,
    },
    SeedWeapon {
        name: "Abyssal whip",
        examine: "A weapon from the abyss.",
        primary: "Slash",
        secondary: "Slash",
        attack_lvl: 70,
        strength_lvl: 1,
        attack_speed: 4,
        attack: [0, 82, 0],
        melee_strength: 82,
        weight: 453,
        exchange_price: Some(1_500_000),
        high_alch_price: Some(72_000),
        frozen: true,
    },
    SeedWeapon {
        name: "Granite maul",
        examine: "Simplicity is the best weapon.",
        primary: "Crush",
        secondary: "Crush",
        attack_lvl: 50,
        strength_lvl: 50,
        attack_speed: 7,
        attack: [0, 0, 81],
        melee_strength: 79,
        weight: 1814,
        exchange_price: Some(25_000),
        high_alch_price: Some(24_000),
        frozen: false,
    },
    SeedWeapon {
        name: "Tzhaar-ket-om",
        examine: "A maul crafted from obsidian.",
        primary: "Crush",
        secondary: "Crush",
        attack_lvl: 1,
        strength_lvl: 60,
        attack_speed: 7,
        attack: [0, 0, 80],
        melee_strength: 85,
        weight: 10_432,
        exchange_price: Some(140_000),
        high_alch_price: Some(45_000),
        frozen: false,
    },
];

impl SeedWeapon {
    fn request(&self) -> CreateWeaponRequest {
        let mut request = CreateWeaponRequest::new(
            self.name,
            self.examine,
            self.primary,
            self.secondary,
            Weight::from_thousandths(self.weight),
        );
        request.required_attack_lvl = self.attack_lvl;
        request.required_strength_lvl = self.strength_lvl;
        request.attack_speed = self.attack_speed;
        let [stab, slash, crush] = self.attack;
        request.attack_stab = stab;
        request.attack_slash = slash;
        request.attack_crush = crush;
        request.melee_strength = self.melee_strength;
        request.exchange_price = self.exchange_price;
        request.high_alch_price = self.high_alch_price;
        request.modifiable = !self.frozen;
        request
    }
}

/// Creates every weapon in `catalog`, stopping at the first failure.
///
/// ## Returns
/// * `Ok(usize)` - Number of weapons created
/// * `Err(WeaponError)` - The first create that failed
async fn seed_catalog<S: WeaponStore>(
    service: &WeaponService<S>,
    catalog: &[SeedWeapon],
) -> WeaponResult<usize> {
    let mut created = 0;

    for seed in catalog {
        let weapon = service.create(seed.request()).await?;
        created += 1;
        info!(id = weapon.id, name = %weapon.name, modifiable = weapon.modifiable, "Seeded weapon");
    }

    Ok(created)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = DbConfig::from_env()?;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(path) = args.get(i + 1) {
                    config.database_path = path.into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Armory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $ARMORY_DATABASE_PATH or armory.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(path = %config.database_path.display(), "Seeding weapon catalog");

    // Connects and applies migrations
    let db = Database::new(config).await?;

    let existing = db.weapons().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has weapons, skipping seed");
        return Ok(());
    }

    let service = WeaponService::new(db.weapons());
    let result = seed_catalog(&service, CATALOG).await;
    db.close().await;

    let created = result?;
    info!(created, "Seed complete");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::{ErrorKind, ListOutcome, MemoryWeaponStore};

    const BROKEN: &[SeedWeapon] = &[
        SeedWeapon {
            name: "Iron dagger",
            examine: "Short but pointy.",
            primary: "Stab",
            secondary: "Slash",
            attack_lvl: 1,
            strength_lvl: 1,
            attack_speed: 4,
            attack: [6, 3, -4],
            melee_strength: 4,
            weight: 453,
            exchange_price: Some(35),
            high_alch_price: Some(21),
            frozen: false,
        },
        SeedWeapon {
            name: "Rusty sword",
            examine: "It has seen better days.",
            primary: "",
            secondary: "Slash",
            attack_lvl: 1,
            strength_lvl: 1,
            attack_speed: 5,
            attack: [0, 5, 0],
            melee_strength: 4,
            weight: 1814,
            exchange_price: None,
            high_alch_price: None,
            frozen: false,
        },
        SeedWeapon {
            name: "Steel mace",
            examine: "A spiky mace.",
            primary: "Crush",
            secondary: "Stab",
            attack_lvl: 5,
            strength_lvl: 1,
            attack_speed: 5,
            attack: [11, 0, 16],
            melee_strength: 13,
            weight: 1814,
            exchange_price: Some(300),
            high_alch_price: Some(150),
            frozen: false,
        },
    ];

    #[tokio::test]
    async fn test_seed_catalog_creates_every_weapon() {
        let service = WeaponService::new(MemoryWeaponStore::new());

        let created = seed_catalog(&service, CATALOG).await.unwrap();

        assert_eq!(created, CATALOG.len());
        assert_eq!(service.list(None).await.unwrap().weapons().len(), CATALOG.len());
    }

    #[tokio::test]
    async fn test_seed_catalog_stops_at_first_failure() {
        let service = WeaponService::new(MemoryWeaponStore::new());

        let err = seed_catalog(&service, BROKEN).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
        // Only the weapon before the failure was written
        match service.list(None).await.unwrap() {
            ListOutcome::Weapons(weapons) => {
                let names: Vec<&str> = weapons.iter().map(|w| w.name.as_str()).collect();
                assert_eq!(names, vec!["Iron dagger"]);
            }
            other => panic!("expected weapons, got {other:?}"),
        }
    }
}
