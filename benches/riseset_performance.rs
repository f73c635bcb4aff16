use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sunriset::{
    CalendarDate, Horizon, ObserverLocation, SolarDaySnapshot, daylength, ephemeris, riseset,
};

const LONDON: ObserverLocation = ObserverLocation::new(51.510, -0.117);

fn benchmark_single_calculation(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 6, 21);

    c.bench_function("ephemeris_single", |b| {
        let d = date.day_offset().local_noon(LONDON.longitude());
        b.iter(|| ephemeris::solar_ephemeris(black_box(d)))
    });

    c.bench_function("crossing_single", |b| {
        b.iter(|| {
            riseset::sunrise_sunset_utc(
                black_box(date),
                black_box(LONDON),
                black_box(Horizon::SunriseSunset),
            )
        })
    });

    c.bench_function("day_length_single", |b| {
        b.iter(|| {
            daylength::day_length(
                black_box(date),
                black_box(LONDON),
                black_box(Horizon::SunriseSunset),
            )
        })
    });

    c.bench_function("snapshot_single", |b| {
        b.iter(|| SolarDaySnapshot::compute(black_box(date), black_box(LONDON)))
    });
}

fn benchmark_year_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_sweep");

    let dates: Vec<CalendarDate> = (1..=12)
        .flat_map(|month| (1..=28).map(move |day| CalendarDate::new(2024, month, day)))
        .collect();
    group.throughput(Throughput::Elements(dates.len() as u64));

    for horizon in Horizon::STANDARD {
        group.bench_with_input(
            BenchmarkId::new("crossing", format!("{horizon:?}")),
            &horizon,
            |b, &horizon| {
                b.iter(|| {
                    for &date in &dates {
                        black_box(riseset::sunrise_sunset_utc(date, LONDON, horizon));
                    }
                })
            },
        );
    }

    group.bench_function("snapshot", |b| {
        b.iter(|| {
            for &date in &dates {
                black_box(SolarDaySnapshot::compute(date, LONDON));
            }
        })
    });

    group.finish();
}

fn benchmark_latitude_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_sweep");
    let date = CalendarDate::new(2024, 12, 21);

    for &count in &[90_u32, 900] {
        let locations: Vec<ObserverLocation> = (0..count)
            .map(|i| {
                let latitude = -89.0 + 178.0 * f64::from(i) / f64::from(count);
                ObserverLocation::new(latitude, 0.0)
            })
            .collect();
        group.throughput(Throughput::Elements(u64::from(count)));

        group.bench_with_input(BenchmarkId::new("day_length", count), &locations, |b, locations| {
            b.iter(|| {
                for &location in locations {
                    black_box(daylength::day_length(date, location, Horizon::CivilTwilight));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_year_sweep,
    benchmark_latitude_sweep
);
criterion_main!(benches);
