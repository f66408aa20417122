//! PKCE verifier/challenge generation for the deep-link login

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes behind a verifier
const VERIFIER_BYTES: usize = 43;

#[derive(Debug, Clone)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

/// Generate a fresh verifier and its challenge
///
/// Panics if the OS random source is unavailable; there is no way to log in
/// without it.
pub fn generate_pkce_pair() -> PkcePair {
    let mut random = [0u8; VERIFIER_BYTES];
    OsRng.fill_bytes(&mut random);

    let verifier = URL_SAFE_NO_PAD.encode(random);
    let challenge = challenge_for(&verifier);

    PkcePair {
        verifier,
        challenge,
    }
}

/// Derive the challenge for a verifier
///
/// Cursor hashes the encoded verifier text, not the raw random bytes.
pub fn challenge_for(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
