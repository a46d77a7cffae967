use elgamal_crypto::errors::ElGamalError;
use elgamal_crypto::prime::is_prime;
use elgamal_crypto::{DomainConfig, DomainParameters, KeyPair};

use rand::SeedableRng;
use rand::rngs::StdRng;

use std::collections::HashSet;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_word_sized_session() -> Result<(), ElGamalError> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(2024);
    let key_pair = KeyPair::generate(&mut rng, &DomainConfig::default())?;
    let public_key = key_pair.public_key();

    let (q, g) = (public_key.q(), public_key.g());
    let p = (q - 1) / 2;
    assert!(is_prime(q) && is_prime(p));
    assert_ne!(g, 1);
    assert_eq!(public_key.ring()?.pow(g, p)?, 1);

    dbg!(public_key);

    for m in [0, 1, 331, 65_537, p, q - 1] {
        let mut seen = HashSet::new();

        for _ in 0..100 {
            let ciphertext = public_key.encrypt(&mut rng, m)?;
            seen.insert(ciphertext);

            assert_eq!(key_pair.decrypt(&ciphertext)?, m);
        }

        // 100 draws from ~2^31 ephemerals collide with negligible probability
        assert!(seen.len() > 95, "m = {} produced {} distinct ciphertexts", m, seen.len());
    }

    Ok(())
}

#[test]
fn showcase_many_domains() -> Result<(), ElGamalError> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(99);
    let config = DomainConfig::default();

    for _ in 0..5 {
        let domain = DomainParameters::generate(&mut rng, &config)?;
        assert_eq!(domain.ring()?.pow(domain.g(), domain.p())?, 1);
        assert!(DomainParameters::try_with(domain.q(), domain.g()).is_ok());

        let key_pair = KeyPair::generate_for_domain(&mut rng, &domain)?;
        let ciphertext = key_pair.public_key().encrypt(&mut rng, 331)?;
        assert_eq!(key_pair.decrypt(&ciphertext)?, 331);
    }

    Ok(())
}
