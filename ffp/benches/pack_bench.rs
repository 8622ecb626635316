use criterion::{Criterion, criterion_group, criterion_main};
use ffp::config::FFPConfig;
use ffp::opt::FFPOptimizer;
use freerects::entities::{Canvas, Instance, Item, Layout};
use freerects::free_space::FreeSpaceEngine;
use freerects::geometry::primitives::Dims;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

const CANVAS_SIZE: i32 = 32;
const N_ITEMS: usize = 20;

fn random_instance(rng: &mut SmallRng) -> Instance {
    let canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE).unwrap();
    let items = (0..N_ITEMS)
        .map(|id| {
            let dims = Dims(rng.random_range(1..=8), rng.random_range(1..=8));
            (Item::new(id, dims), 1)
        })
        .collect();
    Instance::new(items, canvas)
}

fn pack_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let instance = random_instance(&mut rng);

    c.bench_function("pack_random_instance", |b| {
        b.iter(|| {
            let rng = SmallRng::seed_from_u64(0);
            FFPOptimizer::new(instance.clone(), FFPConfig::default(), rng).solve()
        })
    });

    c.bench_function("recompute_free_space", |b| {
        //recompute over a partially filled canvas
        let mut layout = Layout::new(instance.canvas);
        for (item, _) in instance.items.iter().take(N_ITEMS / 2) {
            let _ = layout.place_item(item);
        }
        let placed = layout.placed_rects();
        let mut engine = FreeSpaceEngine::new(instance.canvas.bbox());
        b.iter(|| engine.recompute(&placed));
    });
}

criterion_group!(benches, pack_bench);
criterion_main!(benches);
