//! Benchmarks for the portfolio risk pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use downside_core::{PortfolioWeights, PricePoint};
use downside_engine::{build_return_series, PortfolioRiskCalculator, RiskConfig};
use rust_decimal::Decimal;

/// Deterministic hash for reproducible pseudo-random sequences.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_mul(0x517c_c1b7_2722_0a95).wrapping_add(i);
    x ^= x >> 32;
    x = x.wrapping_mul(0xd6e8_feb8_6659_fd93);
    x ^= x >> 32;
    x
}

fn uniform(seed: u64, i: u64) -> f64 {
    ((simple_hash(seed, i) >> 11) as f64 + 1.0) / (1u64 << 53) as f64
}

fn gaussian(seed: u64, i: u64) -> f64 {
    let u1 = uniform(seed, 2 * i);
    let u2 = uniform(seed, 2 * i + 1);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn day(i: u64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i as i64)
}

fn price_history(asset: &str, seed: u64, days: u64, drift: f64, vol: f64) -> Vec<PricePoint> {
    let mut level = 100.0_f64;
    let mut prices = Vec::with_capacity(days as usize);
    for i in 0..days {
        if i > 0 {
            level *= 1.0 + drift + vol * gaussian(seed, i);
        }
        let price = Decimal::from_f64_retain(level).unwrap();
        prices.push(PricePoint::new(asset, day(i), price).unwrap());
    }
    prices
}

fn three_asset_prices(days: u64) -> Vec<PricePoint> {
    let mut prices = price_history("BTC", 42, days, 0.001, 0.03);
    prices.extend(price_history("ETH", 43, days, 0.0008, 0.025));
    prices.extend(price_history("USDC", 44, days, 0.0001, 0.005));
    prices
}

fn bench_calculate_all_metrics(c: &mut Criterion) {
    let calculator = PortfolioRiskCalculator::new(RiskConfig::default());
    let weights =
        PortfolioWeights::from_pairs([("BTC", 0.6), ("ETH", 0.3), ("USDC", 0.1)]).unwrap();

    let mut group = c.benchmark_group("calculate_all_metrics");
    for days in [100_u64, 400, 1000] {
        let prices = three_asset_prices(days);
        group.throughput(Throughput::Elements(prices.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &prices, |b, prices| {
            b.iter(|| {
                calculator
                    .calculate_all_metrics(black_box(prices), &weights, None)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_build_return_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_return_series");
    for days in [100_u64, 1000] {
        let prices = three_asset_prices(days);
        group.throughput(Throughput::Elements(prices.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &prices, |b, prices| {
            b.iter(|| build_return_series(black_box(prices)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_calculate_all_metrics, bench_build_return_series);
criterion_main!(benches);
