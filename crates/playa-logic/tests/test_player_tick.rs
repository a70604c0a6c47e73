//! Integration tests for the full per-tick pipeline.
//!
//! Exercises: PlayerStats → compute_frame_effects → apply/clamp,
//! and Inventory → CraftingResolver → NotificationSink.
//!
//! All tests are pure logic, driven the way the game loop drives them.

use playa_logic::config::DecayConfig;
use playa_logic::crafting::{can_craft, CraftingResolver};
use playa_logic::effects::{compute_frame_effects, karma_decay, well_being};
use playa_logic::inventory::Inventory;
use playa_logic::items::ItemType;
use playa_logic::notify::Notification;
use playa_logic::position::WorldPosition;
use playa_logic::recipes::RecipeCatalog;
use playa_logic::stats::PlayerStats;

// ── Helpers ────────────────────────────────────────────────────────────

const FRAME: f32 = 1.0 / 60.0;

/// Run `frames` ticks of walking `speed` pixels per frame, clamping each tick.
fn simulate(stats: &mut PlayerStats, config: &DecayConfig, frames: u32, speed: f32) {
    for _ in 0..frames {
        let deltas = compute_frame_effects(speed, FRAME, stats, config);
        deltas.apply_to(stats);
        stats.clamp_to_ranges();
    }
}

fn exact_ingredients(recipe_id: &str) -> Inventory {
    RecipeCatalog::standard()
        .get(recipe_id)
        .map(|r| r.ingredients.iter().map(|i| (i.item, i.quantity)).collect())
        .unwrap_or_default()
}

// ── Stat pipeline ──────────────────────────────────────────────────────

#[test]
fn resting_player_accumulates_needs() {
    let config = DecayConfig::default();
    let mut stats = PlayerStats::default();
    simulate(&mut stats, &config, 60 * 10, 0.0);

    // 10 seconds at rest
    assert!((stats.thirst - 7.5).abs() < 0.05);
    assert!((stats.hunger - 5.0).abs() < 0.05);
    assert!((stats.bathroom - 3.0).abs() < 0.05);
    assert_eq!(stats.energy, 100.0);
    assert!(stats.mood < 100.0);
}

#[test]
fn walking_drains_energy_proportionally() {
    let config = DecayConfig::default();
    let mut slow = PlayerStats::default();
    let mut fast = PlayerStats::default();
    simulate(&mut slow, &config, 60, 1.0);
    simulate(&mut fast, &config, 60, 2.0);

    let slow_loss = 100.0 - slow.energy;
    let fast_loss = 100.0 - fast.energy;
    assert!(slow_loss > 0.0);
    assert!((fast_loss - 2.0 * slow_loss).abs() < 1e-3);
}

#[test]
fn mood_tracks_well_being() {
    let config = DecayConfig::default();
    let mut stats = PlayerStats {
        energy: 40.0,
        thirst: 60.0,
        hunger: 50.0,
        mood: 100.0,
        ..PlayerStats::default()
    };
    // Freeze the other needs by zeroing their rates.
    let frozen = DecayConfig {
        thirst_decay_per_second: 0.0,
        hunger_decay_per_second: 0.0,
        mood_decay_per_second: 0.0,
        ..config
    };
    simulate(&mut stats, &frozen, 60 * 5, 0.0);

    let target = well_being(40.0, 60.0, 50.0);
    assert!((stats.mood - target).abs() < 0.5, "mood {}", stats.mood);
}

#[test]
fn long_session_stays_in_range() {
    let config = DecayConfig::default();
    let mut stats = PlayerStats {
        karma: 80.0,
        ..PlayerStats::default()
    };
    simulate(&mut stats, &config, 60 * 60 * 5, 3.0);

    assert!(stats.in_range());
    assert_eq!(stats.thirst, 100.0);
    assert_eq!(stats.energy, 0.0);
    assert!(stats.karma >= 0.0);
}

#[test]
fn karma_single_large_step_lands_on_zero() {
    let config = DecayConfig::default();
    let mut stats = PlayerStats {
        karma: -2.0,
        ..PlayerStats::default()
    };
    stats.karma += karma_decay(1_000.0, stats.karma, &config);
    assert_eq!(stats.karma, 0.0);
}

// ── Crafting pipeline ──────────────────────────────────────────────────

#[test]
fn exact_ingredients_leave_no_residue() {
    let resolver = CraftingResolver::new(RecipeCatalog::standard());
    for recipe in RecipeCatalog::standard() {
        let mut inventory = exact_ingredients(&recipe.id);
        let mut sink: Vec<Notification> = Vec::new();
        let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);

        assert_eq!(crafted, vec![recipe.result], "{}", recipe.id);
        for ing in &recipe.ingredients {
            assert_eq!(inventory.quantity_of(ing.item), 0);
        }
        assert_eq!(inventory.quantity_of(recipe.result), 1);
        assert_eq!(inventory.total_count(), 1);
        assert_eq!(sink.len(), 1);
    }
}

#[test]
fn one_short_leaves_inventory_untouched() {
    let resolver = CraftingResolver::new(RecipeCatalog::standard());
    for recipe in RecipeCatalog::standard() {
        let mut inventory = exact_ingredients(&recipe.id);
        let first = recipe.ingredients[0];
        inventory.remove(first.item, 1);
        assert!(!can_craft(&inventory, recipe));

        let before = inventory.clone();
        let mut sink: Vec<Notification> = Vec::new();
        let crafted = resolver.auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink);
        assert!(crafted.is_empty(), "{}", recipe.id);
        assert_eq!(inventory, before);
    }
}

#[test]
fn repeated_passes_craft_one_per_pass() {
    let resolver = CraftingResolver::new(RecipeCatalog::standard());
    let mut inventory: Inventory = [
        (ItemType::LightBulb, 6),
        (ItemType::Glitter, 3),
        (ItemType::Rope, 3),
    ]
    .into_iter()
    .collect();
    let mut sink: Vec<Notification> = Vec::new();

    let mut passes = 0;
    while !resolver
        .auto_craft_all(&mut inventory, WorldPosition::default(), &mut sink)
        .is_empty()
    {
        passes += 1;
    }
    assert_eq!(passes, 3);
    assert_eq!(inventory.quantity_of(ItemType::Totem), 3);
    assert_eq!(sink.len(), 3);
    assert_eq!(inventory.total_count(), 3);
}
