//! Playa Headless Simulation Harness
//!
//! Validates the stat and crafting logic without a renderer or input layer.
//! Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p playa-simtest
//!   cargo run -p playa-simtest -- --verbose
//!   cargo run -p playa-simtest -- --json --seed 7 --config session.json
//!
//! Log output is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use playa_core::config::SessionConfig;
use playa_core::engine::GameSession;
use playa_core::sink::LogSink;
use playa_logic::config::DecayConfig;
use playa_logic::crafting::{can_craft, CraftingResolver};
use playa_logic::effects::{self, compute_frame_effects};
use playa_logic::inventory::Inventory;
use playa_logic::items::ItemType;
use playa_logic::notify::Notification;
use playa_logic::position::WorldPosition;
use playa_logic::recipes::RecipeCatalog;
use playa_logic::stats::PlayerStats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    json: bool,
    seed: u64,
    config_path: Option<String>,
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let value_after = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };
    Options {
        verbose: args.iter().any(|a| a == "--verbose"),
        json: args.iter().any(|a| a == "--json"),
        seed: value_after("--seed")
            .and_then(|s| s.parse().ok())
            .unwrap_or(42),
        config_path: value_after("--config"),
    }
}

fn load_session_config(path: Option<&str>) -> Result<SessionConfig, String> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    SessionConfig::from_json_str(&text).map_err(|e| format!("{}: {}", path, e))
}

/// Filter built from `RUST_LOG` directives, falling back to `warn` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args();
    let session_config = match load_session_config(opts.config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            std::process::exit(2);
        }
    };

    println!("=== Playa Simulation Harness (seed {}) ===\n", opts.seed);

    let mut results = Vec::new();

    // 1. Stat effect properties
    results.extend(validate_stat_effects(opts.verbose));

    // 2. Recipe catalog and crafting scenarios
    results.extend(validate_crafting(opts.verbose));

    // 3. Random inventory sweep
    results.extend(validate_random_crafting(opts.seed, opts.verbose));

    // 4. Session soak
    let session_results = validate_session_soak(&session_config, opts.seed, opts.json);
    results.extend(session_results);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || opts.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Stat Effects ─────────────────────────────────────────────────────

fn validate_stat_effects(verbose: bool) -> Vec<TestResult> {
    println!("--- Stat Effects ---");
    let mut results = Vec::new();
    let config = DecayConfig::default();

    // Documented rest frame
    let rest = PlayerStats::default();
    let d = compute_frame_effects(0.0, 1.0, &rest, &config);
    let rest_ok = (d.thirst - 0.75).abs() < 1e-5
        && (d.hunger - 0.5).abs() < 1e-5
        && (d.bathroom - 0.3).abs() < 1e-5
        && d.karma == 0.0
        && d.energy == 0.0
        && (d.mood + 0.1).abs() < 1e-5;
    results.push(TestResult {
        name: "effects_rest_frame".into(),
        passed: rest_ok,
        detail: format!("{:?}", d),
    });

    // Sign sweep over distance and time
    let mut sign_violations = 0;
    for step in 0..=100 {
        let x = step as f32 * 0.5;
        if effects::movement_energy_decay(x, &config) > 0.0 {
            sign_violations += 1;
        }
        for v in [
            effects::thirst_decay(x, &config),
            effects::hunger_decay(x, &config),
            effects::bathroom_decay(x, &config),
        ] {
            if v < 0.0 {
                sign_violations += 1;
            }
        }
    }
    results.push(TestResult {
        name: "effects_sign_sweep".into(),
        passed: sign_violations == 0,
        detail: format!("{} sign violations over 101 samples", sign_violations),
    });

    // Karma always pulls toward zero
    let mut karma_violations = 0;
    for k in -100..=100 {
        let karma = k as f32;
        let delta = effects::karma_decay(0.5, karma, &config);
        let wrong = if karma == 0.0 {
            delta != 0.0
        } else {
            delta.signum() == karma.signum() || (karma + delta).signum() == -karma.signum()
        };
        if wrong {
            karma_violations += 1;
        }
    }
    results.push(TestResult {
        name: "effects_karma_toward_zero".into(),
        passed: karma_violations == 0,
        detail: format!("{} violations over karma -100..=100", karma_violations),
    });

    // Equilibrium mood equals base decay
    let mut eq_max_err: f32 = 0.0;
    for e in (0..=100).step_by(10) {
        let energy = e as f32;
        // thirst = hunger = 100 - energy puts well-being at `energy`
        let other = 100.0 - energy;
        let delta = effects::mood_decay(0.5, energy, other, other, energy, &config);
        eq_max_err = eq_max_err.max((delta + 0.5 * config.mood_decay_per_second).abs());
    }
    results.push(TestResult {
        name: "effects_mood_equilibrium".into(),
        passed: eq_max_err < 1e-4,
        detail: format!("max error {:.2e}", eq_max_err),
    });

    if verbose {
        println!("  Default rates: {:?}", config);
    }

    results
}

// ── 2. Crafting ─────────────────────────────────────────────────────────

fn validate_crafting(verbose: bool) -> Vec<TestResult> {
    println!("--- Recipe Catalog & Crafting ---");
    let mut results = Vec::new();
    let catalog = RecipeCatalog::standard();
    let resolver = CraftingResolver::new(catalog);

    let valid = RecipeCatalog::new(catalog.iter().cloned().collect());
    results.push(TestResult {
        name: "catalog_valid".into(),
        passed: valid.is_ok(),
        detail: match &valid {
            Ok(c) => format!("{} recipes", c.len()),
            Err(e) => e.to_string(),
        },
    });

    // Totem scenario
    let mut inventory: Inventory = [
        (ItemType::LightBulb, 2),
        (ItemType::Glitter, 1),
        (ItemType::Rope, 1),
    ]
    .into_iter()
    .collect();
    let mut sink: Vec<Notification> = Vec::new();
    let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);
    results.push(TestResult {
        name: "craft_totem_scenario".into(),
        passed: crafted == vec![ItemType::Totem]
            && inventory.total_count() == 1
            && inventory.quantity_of(ItemType::Totem) == 1,
        detail: format!("crafted {:?}, left {:?}", crafted, inventory),
    });

    // One short
    let mut inventory: Inventory = [
        (ItemType::LightBulb, 1),
        (ItemType::Glitter, 1),
        (ItemType::Rope, 1),
    ]
    .into_iter()
    .collect();
    let before = inventory.clone();
    let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);
    results.push(TestResult {
        name: "craft_one_short".into(),
        passed: crafted.is_empty() && inventory == before,
        detail: format!("crafted {:?}", crafted),
    });

    // Shared glitter: declaration order decides
    let mut inventory: Inventory = [
        (ItemType::LightBulb, 2),
        (ItemType::Glitter, 1),
        (ItemType::Rope, 1),
        (ItemType::Fabric, 2),
    ]
    .into_iter()
    .collect();
    let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);
    results.push(TestResult {
        name: "craft_order_tiebreak".into(),
        passed: crafted == vec![ItemType::Totem] && inventory.quantity_of(ItemType::Fabric) == 2,
        detail: format!("crafted {:?}", crafted),
    });

    if verbose {
        for recipe in catalog {
            let needs: Vec<String> = recipe
                .ingredients
                .iter()
                .map(|i| format!("{}x {}", i.quantity, i.item))
                .collect();
            println!("  {:16} {} <- {}", recipe.id, recipe.result, needs.join(", "));
        }
    }

    results
}

// ── 3. Random Sweep ─────────────────────────────────────────────────────

fn validate_random_crafting(seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Crafting Sweep ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let catalog = RecipeCatalog::standard();
    let resolver = CraftingResolver::new(catalog);
    let raw: Vec<ItemType> = ItemType::ALL
        .iter()
        .copied()
        .filter(|i| !i.is_crafted())
        .collect();

    let trials = 2_000;
    let mut conservation_failures = 0;
    let mut preview_mismatches = 0;
    let mut total_crafted = 0;

    for _ in 0..trials {
        let mut inventory = Inventory::new();
        for &item in &raw {
            inventory.add(item, rng.gen_range(0..4));
        }
        let before = inventory.clone();
        let previewed = resolver.available_recipes(&inventory).len();

        let mut sink: Vec<Notification> = Vec::new();
        let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);
        total_crafted += crafted.len();

        // Every raw item removed must be accounted for by a fired recipe.
        let mut expected = before.clone();
        for result in &crafted {
            let recipe = catalog.recipes_for(*result).next();
            if let Some(recipe) = recipe {
                for ing in &recipe.ingredients {
                    expected.remove(ing.item, ing.quantity);
                }
                expected.add(recipe.result, 1);
            }
        }
        if expected != inventory || sink.len() != crafted.len() {
            conservation_failures += 1;
        }
        // Passes only ever fire previewed recipes (earlier ones may starve later ones).
        if crafted.len() > previewed {
            preview_mismatches += 1;
        }
    }

    results.push(TestResult {
        name: "sweep_conservation".into(),
        passed: conservation_failures == 0,
        detail: format!(
            "{} failures over {} trials ({} items crafted)",
            conservation_failures, trials, total_crafted
        ),
    });
    results.push(TestResult {
        name: "sweep_preview_bound".into(),
        passed: preview_mismatches == 0,
        detail: format!("{} passes crafted more than previewed", preview_mismatches),
    });

    // can_craft is stable without mutation
    let inventory: Inventory = raw.iter().map(|&i| (i, rng.gen_range(0..3))).collect();
    let stable = catalog.iter().all(|r| {
        let first = can_craft(&inventory, r);
        (0..10).all(|_| can_craft(&inventory, r) == first)
    });
    results.push(TestResult {
        name: "sweep_can_craft_idempotent".into(),
        passed: stable,
        detail: "repeated checks agree".into(),
    });

    if verbose {
        println!("  {} trials, {} crafted", trials, total_crafted);
    }

    results
}

// ── 4. Session Soak ─────────────────────────────────────────────────────

fn validate_session_soak(config: &SessionConfig, seed: u64, json: bool) -> Vec<TestResult> {
    println!("--- Session Soak ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = GameSession::new(config.clone(), RecipeCatalog::standard());
    let mut sink = LogSink;

    // 10 simulated minutes at 60 FPS with random walking and pickups
    let frames = 60 * 60 * 10;
    let mut out_of_range = 0;
    let mut passes = 0;
    let mut crafted = 0;
    let mut pos = WorldPosition::default();

    for frame in 0..frames {
        pos.x += rng.gen_range(-2.0..2.0);
        pos.y += rng.gen_range(-2.0..2.0);
        session.move_to(pos);

        if frame % 120 == 0 {
            let item = ItemType::ALL[rng.gen_range(0..7)];
            session.pick_up(item, 1);
        }
        if frame % 600 == 0 {
            session.adjust_karma(rng.gen_range(-30.0..30.0));
        }

        let report = session.update(1.0 / 60.0, &mut sink);
        if report.craft_pass_ran {
            passes += 1;
        }
        crafted += report.crafted.len();
        if !session.stats().in_range() {
            out_of_range += 1;
        }
    }

    results.push(TestResult {
        name: "session_stats_in_range".into(),
        passed: out_of_range == 0,
        detail: format!("{} out-of-range frames of {}", out_of_range, frames),
    });

    let interval = config.craft_interval_seconds as f64;
    let max_passes = if interval > 0.0 {
        (session.sim_time() / interval).ceil() as usize + 1
    } else {
        frames
    };
    results.push(TestResult {
        name: "session_craft_throttle".into(),
        passed: passes <= max_passes,
        detail: format!("{} passes (max {}), {} crafted", passes, max_passes, crafted),
    });

    if json {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("snapshot serialization failed: {}", e),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_bare_level_is_honoured() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_targeted_directive_is_honoured() {
        assert_eq!(
            log_filter(Some("playa_logic=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
