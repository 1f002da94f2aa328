use ed25519_dalek::{Signer, SigningKey};
use eddsa::{BatchConfig, BatchVerifier, Reducer, Signature};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let mut messages = Vec::new();
    let mut public_keys = Vec::new();
    let mut signatures = Vec::new();
    for i in 0..10u32 {
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);
        let sk = SigningKey::from_bytes(&secret);
        let message = format!("hello batch {i}").into_bytes();

        let sig = Signature::from_bytes(&sk.sign(&message).to_bytes());
        let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
        let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

        signatures.push(sig2);
        public_keys.push(sk.verifying_key().to_bytes());
        messages.push(message);
    }
    messages[6] = b"tampered".to_vec();

    let config = BatchConfig::with_reducer(Reducer::Hgcd);
    let mut verifier = BatchVerifier::with_rng(config, rng);
    let result = verifier
        .verify(&messages, &public_keys, &signatures)
        .expect("verify");

    println!("valid: {:?}", result.valid);
    println!("fallback rounds: {}", result.fallback_rounds);
    assert_eq!(result.invalid().collect::<Vec<_>>(), vec![6]);
}
