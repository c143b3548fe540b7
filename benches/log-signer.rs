#[macro_use]
extern crate criterion;
use criterion::Criterion;
use ct_log_signer::{LogEntryType, LogSigVerifier, LogSigner, PrivateKey, PublicKey};
use p256::ecdsa::SigningKey;
use sha2::{Digest, Sha256};

fn key_pair() -> (LogSigner, LogSigVerifier) {
    let key = PrivateKey::from(SigningKey::from_slice(&[0x42; 32]).unwrap());
    let verifier = LogSigVerifier::new(PublicKey::from(&key));
    (LogSigner::new(key), verifier)
}

fn sign_timestamp_with_size(size: usize, c: &mut Criterion) {
    let (signer, _) = key_pair();
    let cert = vec![0x30u8; size];
    c.bench_function(format!("Sign timestamp, certificate of {} bytes", size).as_str(), |b| {
        b.iter(|| signer.sign_timestamp(1_000_000, LogEntryType::X509, &cert).unwrap())
    });
}

fn verify_timestamp_with_size(size: usize, c: &mut Criterion) {
    let (signer, verifier) = key_pair();
    let cert = vec![0x30u8; size];
    let blob = signer
        .sign_timestamp(1_000_000, LogEntryType::X509, &cert)
        .unwrap()
        .encode()
        .unwrap();
    c.bench_function(format!("Verify timestamp, certificate of {} bytes", size).as_str(), |b| {
        b.iter(|| {
            verifier
                .verify_timestamp(1_000_000, LogEntryType::X509, &cert, &blob)
                .unwrap()
        })
    });
}

fn sign_timestamp_small(c: &mut Criterion) {
    sign_timestamp_with_size(200, c)
}
fn sign_timestamp_large(c: &mut Criterion) {
    sign_timestamp_with_size(64 * 1024, c)
}
fn verify_timestamp_small(c: &mut Criterion) {
    verify_timestamp_with_size(200, c)
}
fn verify_timestamp_large(c: &mut Criterion) {
    verify_timestamp_with_size(64 * 1024, c)
}

fn tree_head(c: &mut Criterion) {
    let (signer, verifier) = key_pair();
    let root_hash = Sha256::digest(b"log contents");
    c.bench_function("Sign tree head", |b| {
        b.iter(|| signer.sign_tree_head(1_000_000, 1 << 20, &root_hash).unwrap())
    });

    let blob = signer
        .sign_tree_head(1_000_000, 1 << 20, &root_hash)
        .unwrap()
        .encode()
        .unwrap();
    c.bench_function("Verify tree head", |b| {
        b.iter(|| {
            verifier
                .verify_tree_head(1_000_000, 1 << 20, &root_hash, &blob)
                .unwrap()
        })
    });
}

criterion_group!(
    timestamps,
    sign_timestamp_small,
    sign_timestamp_large,
    verify_timestamp_small,
    verify_timestamp_large
);
criterion_group!(tree_heads, tree_head);
criterion_main!(timestamps, tree_heads);
