use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portal_types::{Address, Caveat};

fn secp256k1_sign_bench(c: &mut Criterion) {
    let kp = portal_crypto::generate_keypair();
    let msg = [42u8; 32];

    c.bench_function("secp256k1_sign_32B", |b| {
        b.iter(|| portal_crypto::sign_message(black_box(&msg), &kp.private))
    });
}

fn secp256k1_recover_bench(c: &mut Criterion) {
    let kp = portal_crypto::generate_keypair();
    let msg = [42u8; 32];
    let sig = portal_crypto::sign_message(&msg, &kp.private).expect("sign");

    c.bench_function("secp256k1_recover_32B", |b| {
        b.iter(|| portal_crypto::recover_address(black_box(&msg), &sig))
    });
}

fn keccak_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("keccak256_256B", |b| {
        b.iter(|| portal_crypto::keccak256(black_box(&data)))
    });
}

fn delegation_hash_bench(c: &mut Criterion) {
    let delegator = Address::from_bytes(&[0xAA; 20]);
    let delegatee = Address::from_bytes(&[0xBB; 20]);
    let caveat = Caveat::new(format!("0x{}", "ff".repeat(64)));

    c.bench_function("delegation_hash_64B_caveat", |b| {
        b.iter(|| portal_crypto::delegation_hash(black_box(&delegator), &delegatee, &caveat))
    });
}

fn delegation_id_bench(c: &mut Criterion) {
    c.bench_function("delegation_id_generate", |b| {
        b.iter(portal_crypto::generate_delegation_id)
    });
}

criterion_group!(
    benches,
    secp256k1_sign_bench,
    secp256k1_recover_bench,
    keccak_256_bench,
    delegation_hash_bench,
    delegation_id_bench,
);
criterion_main!(benches);
