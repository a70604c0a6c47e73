use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playa_core::prelude::*;

fn frame_effects(c: &mut Criterion) {
    let config = DecayConfig::default();
    let stats = PlayerStats {
        energy: 63.0,
        mood: 41.0,
        thirst: 22.0,
        hunger: 37.0,
        karma: -12.0,
        bathroom: 8.0,
    };
    c.bench_function("compute_frame_effects", |b| {
        b.iter(|| compute_frame_effects(black_box(2.5), black_box(1.0 / 60.0), &stats, &config))
    });
}

fn session_tick(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), RecipeCatalog::standard());
    let mut sink: Vec<Notification> = Vec::new();
    let mut x = 0.0;
    c.bench_function("session_update", |b| {
        b.iter(|| {
            x += 1.5;
            session.move_to(WorldPosition::new(x, 0.0));
            session.pick_up(ItemType::LightBulb, 1);
            session.pick_up(ItemType::Glitter, 1);
            session.pick_up(ItemType::Rope, 1);
            session.update(black_box(1.0 / 60.0), &mut sink);
            sink.clear();
        })
    });
}

criterion_group!(benches, frame_effects, session_tick);
criterion_main!(benches);
