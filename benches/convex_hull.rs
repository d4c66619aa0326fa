use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hull2d::algorithms::{build_hull, Strategy};
use hull2d::data::Point;
use hull2d::generators;

const STRATEGIES: [(Strategy, &str); 3] = [
  (Strategy::GiftWrap, "gift_wrap"),
  (Strategy::AngularSort, "angular_sort"),
  (Strategy::DivideAndConquer, "divide_and_conquer"),
];

fn bench_distribution(c: &mut Criterion, name: &str, pts: &[Point<f64, 2>]) {
  let mut group = c.benchmark_group(name);
  for (strategy, label) in STRATEGIES {
    group.bench_function(label, |b| {
      b.iter_batched(|| pts.to_vec(), |pts| build_hull(&pts, strategy), BatchSize::SmallInput)
    });
  }
  group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

  for n in [1_000, 10_000] {
    let pts = generators::uniform_rect(n, 1000.0, 1000.0, &mut rng);
    bench_distribution(c, &format!("uniform({})", n), &pts);
  }

  // Every point on the hull; adversarial for the output-sensitive march.
  let pts = generators::ring(1_000, 500.0, 0.0, &mut rng);
  bench_distribution(c, "ring(1000)", &pts);

  // Long colinear runs on every edge.
  let pts = generators::square_boundary(250, 1000.0);
  bench_distribution(c, "square_boundary(996)", &pts);

  // Integer coordinates through the widening exact predicates.
  let pts: Vec<Point<i64, 2>> = (0..10_000)
    .map(|_| {
      let pt: Point<i64, 2> = rng.gen();
      Point::new([pt.x_coord() % 1_000_000, pt.y_coord() % 1_000_000])
    })
    .collect();
  let mut group = c.benchmark_group("uniform_i64(10000)");
  for (strategy, label) in STRATEGIES {
    group.bench_function(label, |b| {
      b.iter_batched(|| pts.clone(), |pts| build_hull(&pts, strategy), BatchSize::SmallInput)
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
