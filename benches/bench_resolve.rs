use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soft_asset_loader::{
    Asset, AssetLoader, AssetPath, ManualStreamingManager, SoftObjectPtr,
};

use std::sync::Arc;

// Simple mock asset
struct MockAsset {
    _data: Vec<u8>,
}

impl Asset for MockAsset {}

fn bench_resident_short_circuit(c: &mut Criterion) {
    let manager = Arc::new(ManualStreamingManager::new());
    let path = AssetPath::parse("/Game/Bench/Resident").unwrap();
    manager.insert_object(path.clone(), Arc::new(MockAsset { _data: vec![0; 64] }));
    let loader = AssetLoader::new(manager);
    let reference = SoftObjectPtr::<MockAsset>::new(path);

    c.bench_function("load_async_resident", |b| {
        b.iter(|| {
            // Completes before returning, no request issued
            let future = loader.load_async(black_box(reference.clone()));
            black_box(future.wait());
        });
    });
}

fn bench_async_round_trip(c: &mut Criterion) {
    let manager = Arc::new(ManualStreamingManager::new());
    let loader = AssetLoader::new(manager.clone());
    let path = AssetPath::parse("/Game/Bench/Streamed").unwrap();
    let reference = SoftObjectPtr::<MockAsset>::new(path.clone());
    let asset = Arc::new(MockAsset { _data: vec![0; 64] });

    c.bench_function("load_async_request_and_pump", |b| {
        b.iter(|| {
            manager.remove(&path);
            manager.stage_object(path.clone(), asset.clone());
            let future = loader.load_async(reference.clone());
            manager.pump();
            black_box(future.wait());
        });
    });
}

fn bench_path_parse(c: &mut Criterion) {
    c.bench_function("asset_path_parse", |b| {
        b.iter(|| AssetPath::parse(black_box("/Game/Characters/Hero/Mesh.Hero_Mesh:LOD0")));
    });
}

criterion_group!(
    benches,
    bench_resident_short_circuit,
    bench_async_round_trip,
    bench_path_parse
);
criterion_main!(benches);
