//! Benchmarks for the rotor cipher machines.
//!
//! Measures key-sheet validation cost, per-machine encode throughput and how
//! SIGABA encode time scales with message length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{
    CipherMachine, Enigma, EnigmaSettings, M209Settings, Sigaba, SigabaSettings, M209,
};

/// Message used consistently across throughput benchmarks.
const BENCH_MESSAGE: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGTHEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

fn pinned_m209_settings() -> M209Settings {
    M209Settings {
        wheel_key: "ABCDEF".to_string(),
        pins: vec![
            "++-+--+++-+-+--+-++-+--+-+".to_string(),
            "-+-++-+--+++-+-+--+-++-+-".to_string(),
            "++--+-+-+++--+-+-++--+-".to_string(),
            "-++-+--+-++-+-+--+-+-".to_string(),
            "+-+-++-+--+-+-+++-+".to_string(),
            "++-+-+--+-+-+-+--".to_string(),
        ],
        lugs: vec![[3, 6], [0, 6], [1, 6], [1, 5], [4, 5], [0, 4], [2, 0], [2, 5]],
    }
}

/// Benchmarks building each machine from its default key sheet.
///
/// Covers rotor name parsing, wiring validation and start-state derivation.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("enigma", |b| {
        let settings = EnigmaSettings::default();
        b.iter(|| Enigma::new(black_box(&settings)).unwrap());
    });
    group.bench_function("m209", |b| {
        let settings = pinned_m209_settings();
        b.iter(|| M209::new(black_box(&settings)).unwrap());
    });
    group.bench_function("sigaba", |b| {
        let settings = SigabaSettings::default();
        b.iter(|| Sigaba::new(black_box(&settings)).unwrap());
    });

    group.finish();
}

/// Benchmarks encoding one 70-letter message on each machine.
///
/// Every call starts from the keyed positions, so iterations are independent.
fn bench_encode(c: &mut Criterion) {
    let machines: Vec<Box<dyn CipherMachine>> = vec![
        Box::new(Enigma::new(&EnigmaSettings::default()).unwrap()),
        Box::new(M209::new(&pinned_m209_settings()).unwrap()),
        Box::new(Sigaba::new(&SigabaSettings::default()).unwrap()),
    ];

    let mut group = c.benchmark_group("encode_message");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for machine in &machines {
        group.bench_function(machine.name(), |b| {
            b.iter(|| machine.encode(black_box(BENCH_MESSAGE)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks SIGABA encode across message lengths.
///
/// The control maze runs four passes per letter, so cost should stay linear.
fn bench_sigaba_length_scaling(c: &mut Criterion) {
    let sigaba = Sigaba::new(&SigabaSettings::default()).unwrap();
    let lengths: &[usize] = &[16, 256, 4096];

    let mut group = c.benchmark_group("sigaba_length_scaling");

    for &len in lengths {
        let text: String = BENCH_MESSAGE.chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| sigaba.encode(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_encode,
    bench_sigaba_length_scaling,
);
criterion_main!(benches);
