use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_query_engine::{
    EngineConfig, FilterCriteria, FixtureDataset, HotelQueryEngine, HotelRecord, ReviewRecord,
    SortKey,
};
use rand::{seq::SliceRandom, thread_rng, Rng};

const CITIES: [&str; 5] = ["lilongwe", "blantyre", "zomba", "mzuzu", "mangochi"];

// Generate a fixture of `size` hotels spread across the cities, each with a few reviews
fn generate_dataset(size: usize) -> FixtureDataset {
    let mut rng = thread_rng();
    let hotels = (0..size)
        .map(|i| {
            let city = CITIES.choose(&mut rng).unwrap();
            let ratings = rng.gen_range(10..=50) as f64 / 10.0;
            let price = rng.gen_range(30..2000) as f64;
            let reviews = (0..rng.gen_range(0..20))
                .map(|_| ReviewRecord::new(rng.gen_range(10..=50) as f64 / 10.0))
                .collect();
            HotelRecord::new(i as u64, &format!("hotel{}", i), city, ratings, price)
                .with_reviews(reviews)
        })
        .collect();
    FixtureDataset::new(hotels).unwrap()
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_listing_search");

    // Benchmark with different dataset sizes
    for size in [100, 1_000, 10_000].iter() {
        let engine = HotelQueryEngine::new(generate_dataset(*size), EngineConfig::default()).unwrap();
        let criteria = FilterCriteria::for_city("lilongwe")
            .with_star_ratings(&["4", "5"])
            .with_price_range(50.0, 1500.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let results = engine
                    .search_hotels(
                        black_box(&criteria),
                        Some(SortKey::PriceLowToHigh),
                        Some(2),
                    )
                    .unwrap();
                black_box(results.total_results)
            });
        });
    }

    group.finish();
}

pub fn review_benchmark(c: &mut Criterion) {
    let engine = HotelQueryEngine::new(generate_dataset(1_000), EngineConfig::default()).unwrap();

    c.bench_function("hotel_reviews_page", |b| {
        b.iter(|| {
            for hotel_id in (0..1_000u64).step_by(97) {
                black_box(engine.list_hotel_reviews(hotel_id, Some(2)).unwrap());
            }
        });
    });
}

criterion_group!(benches, search_benchmark, review_benchmark);
criterion_main!(benches);
