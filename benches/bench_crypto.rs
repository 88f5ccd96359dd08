extern crate emerald_signer as emerald;
#[macro_use]
extern crate bencher;

use crate::emerald::{
    build_transaction,
    decode,
    derive_public_key,
    encode,
    sign,
    verify,
    EthereumTransaction,
    Signer,
};

use bencher::Bencher;

const PRIVATE_KEY: &str = "0xfad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19";

fn tx() -> EthereumTransaction {
    build_transaction(
        0,
        1_000_000_000u64.into(),
        21000,
        "0x96216849c49358B10257cb55b28eA603c874b05E",
        1_000_000_000_000_000_000u64.into(),
        vec![0xab; 68],
    )
    .unwrap()
}

fn bench_sign_legacy(b: &mut Bencher) {
    let tx = tx();
    b.iter(|| sign(&tx, Signer::Legacy, PRIVATE_KEY));
}

fn bench_sign_protected(b: &mut Bencher) {
    let tx = tx();
    b.iter(|| sign(&tx, Signer::ChainProtected(1), PRIVATE_KEY));
}

fn bench_encode(b: &mut Bencher) {
    let signed = sign(&tx(), Signer::ChainProtected(1), PRIVATE_KEY).unwrap();
    b.iter(|| encode(&signed));
}

fn bench_decode(b: &mut Bencher) {
    let raw = encode(&sign(&tx(), Signer::ChainProtected(1), PRIVATE_KEY).unwrap());
    b.iter(|| decode(&raw));
}

fn bench_verify(b: &mut Bencher) {
    let signed = sign(&tx(), Signer::ChainProtected(1), PRIVATE_KEY).unwrap();
    let pubkey = derive_public_key(PRIVATE_KEY).unwrap().to_string();
    b.iter(|| verify(&signed, &pubkey));
}

benchmark_group!(
    benches,
    bench_sign_legacy,
    bench_sign_protected,
    bench_encode,
    bench_decode,
    bench_verify,
);
benchmark_main!(benches);
