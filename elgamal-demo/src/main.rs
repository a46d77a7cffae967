use elgamal_crypto::errors::ElGamalError;
use elgamal_crypto::{create_key_pair, decrypt, encrypt};

use std::io::{self, BufRead};

const PLAINTEXT: i64 = 331;

fn run_round() -> Result<(), ElGamalError> {
    let key_pair = create_key_pair()?;
    let public_key = key_pair.public_key();

    println!("pk = {}", public_key);
    println!("sk = {}", key_pair.secret_key());
    println!(" m = {}", PLAINTEXT);

    let ciphertext = encrypt(PLAINTEXT, public_key)?;
    println!(" c = {}", ciphertext);

    let recovered = decrypt(&ciphertext, &key_pair)?;
    println!("m' = {}", recovered);

    if recovered != PLAINTEXT {
        log::error!("round trip mismatch: {} != {}", recovered, PLAINTEXT);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Err(e) = run_round() {
            log::error!("{}", e);
        }

        // Enter for another round, `q` or EOF to stop
        match lines.next() {
            Some(Ok(line)) if line.trim() != "q" => continue,
            _ => break,
        }
    }
}
