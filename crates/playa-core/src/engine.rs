//! Game session - main entry point for driving one player from the game loop

use log::{debug, trace};
use playa_logic::crafting::CraftingResolver;
use playa_logic::effects::{compute_frame_effects, low_energy_mood_penalty};
use playa_logic::inventory::Inventory;
use playa_logic::items::ItemType;
use playa_logic::notify::NotificationSink;
use playa_logic::position::WorldPosition;
use playa_logic::recipes::{CraftingRecipe, RecipeCatalog};
use playa_logic::stats::{PlayerStats, StatDeltas};
use serde::Serialize;

use crate::config::SessionConfig;

/// What one call to [`GameSession::update`] did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    /// Deltas applied this tick, before clamping.
    pub deltas: StatDeltas,
    /// Distance walked since the previous tick.
    pub distance_moved: f32,
    /// Whether an auto-craft pass ran this tick.
    pub craft_pass_ran: bool,
    /// Items produced by that pass, in firing order.
    pub crafted: Vec<ItemType>,
}

/// Snapshot of a session for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub sim_time: f64,
    pub position: WorldPosition,
    pub stats: PlayerStats,
    pub inventory: Inventory,
}

/// One player's stats, inventory and position, advanced tick by tick.
pub struct GameSession<'c> {
    stats: PlayerStats,
    inventory: Inventory,
    position: WorldPosition,
    resolver: CraftingResolver<'c>,
    config: SessionConfig,

    /// Distance walked since the last tick
    pending_distance: f32,
    /// Simulation time in seconds since start
    sim_time: f64,
    last_craft_time: f64,
}

impl<'c> GameSession<'c> {
    /// Start a fresh session at the origin with default stats and an empty inventory.
    pub fn new(mut config: SessionConfig, catalog: &'c RecipeCatalog) -> Self {
        config.time_scale = config.time_scale.max(0.0);
        Self {
            stats: PlayerStats::default(),
            inventory: Inventory::new(),
            position: WorldPosition::default(),
            resolver: CraftingResolver::new(catalog),
            config,
            pending_distance: 0.0,
            sim_time: 0.0,
            last_craft_time: 0.0,
        }
    }

    /// Replace the starting stats.
    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Move the player, accumulating distance for the next tick's energy cost.
    pub fn move_to(&mut self, position: WorldPosition) {
        self.pending_distance += self.position.distance_to(&position);
        self.position = position;
    }

    /// Add items picked up during play. Crafting waits for the next pass.
    pub fn pick_up(&mut self, item: ItemType, quantity: u32) {
        self.inventory.add(item, quantity);
    }

    /// Drop items; returns `false` when not enough are held.
    pub fn drop_item(&mut self, item: ItemType, quantity: u32) -> bool {
        self.inventory.remove(item, quantity)
    }

    /// Shift karma by a gameplay event, clamped to its range.
    pub fn adjust_karma(&mut self, amount: f32) {
        self.stats.karma += amount;
        self.stats.clamp_to_ranges();
    }

    /// Advance the session by `delta_seconds` of real time.
    pub fn update(&mut self, delta_seconds: f32, sink: &mut dyn NotificationSink) -> TickReport {
        let dt = delta_seconds * self.config.time_scale;
        self.sim_time += dt as f64;

        let distance_moved = std::mem::take(&mut self.pending_distance);
        let decay = &self.config.decay;
        let mut deltas = compute_frame_effects(distance_moved, dt, &self.stats, decay);
        if self.config.apply_low_energy_penalty {
            deltas.mood += low_energy_mood_penalty(dt, self.stats.energy, decay);
        }
        deltas.apply_to(&mut self.stats);
        self.stats.clamp_to_ranges();
        trace!("tick dt={:.4}s moved={:.1}px stats={:?}", dt, distance_moved, self.stats);

        let mut report = TickReport {
            deltas,
            distance_moved,
            ..Default::default()
        };

        let craft_interval = self.config.craft_interval_seconds as f64;
        if self.sim_time - self.last_craft_time >= craft_interval {
            report.crafted = self.craft_now(sink);
            report.craft_pass_ran = true;
        }
        report
    }

    /// Run an auto-craft pass immediately, regardless of the interval.
    pub fn craft_now(&mut self, sink: &mut dyn NotificationSink) -> Vec<ItemType> {
        self.last_craft_time = self.sim_time;
        let crafted = self
            .resolver
            .auto_craft_all(&mut self.inventory, self.position, sink);
        if !crafted.is_empty() {
            debug!("t={:.1}s crafted {:?}", self.sim_time, crafted);
        }
        crafted
    }

    /// Recipes the current inventory could craft.
    pub fn available_recipes(&self) -> Vec<&'c CraftingRecipe> {
        self.resolver.available_recipes(&self.inventory)
    }

    /// Set time scale (1.0 = real-time, 2.0 = 2x speed, etc.)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.config.time_scale
    }

    /// Simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn position(&self) -> WorldPosition {
        self.position
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            sim_time: self.sim_time,
            position: self.position,
            stats: self.stats,
            inventory: self.inventory.clone(),
        }
    }
}
