use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use readthru::{DataProvider, ReadThroughCache, Result};

/// Cheap deterministic provider so the bench measures cache overhead
struct SquareProvider;

impl DataProvider<u64, u64> for SquareProvider {
    fn fetch(&self, key: &u64) -> Result<u64> {
        Ok(key.wrapping_mul(*key))
    }
}

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let provider = SquareProvider;
        let mut cache = ReadThroughCache::new(&provider, 1000).unwrap();

        // Warm the cache
        for key in 0..100u64 {
            cache.get(&key).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_miss_evict", |b| {
        let provider = SquareProvider;
        let mut cache = ReadThroughCache::new(&provider, 10).unwrap(); // Small cache

        // Fresh key every iteration: always a miss, always an eviction once full
        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&counter).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_hit_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_hit_50_miss", |b| {
        let provider = SquareProvider;
        let mut cache = ReadThroughCache::new(&provider, 100).unwrap();

        // Keep one hot key resident, alternate with a cold stream
        cache.get(&0).unwrap();

        let mut counter = 1u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&0).unwrap());
            } else {
                black_box(cache.get(&counter).unwrap());
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_get, bench_cache_miss, bench_mixed_hit_miss);
criterion_main!(benches);
