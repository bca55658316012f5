//! Salted, iterated credential hashing with constant-time verification.
//!
//! Hashes are self-describing: the iteration count and salt travel with the
//! derived subkey as `"{iterations}.{salt_b64}.{subkey_b64}"`, so stored
//! hashes stay verifiable if the default parameters change later.

use std::num::NonZeroU32;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;
use ring::pbkdf2;
use subtle::ConstantTimeEq;

/// PBKDF2-HMAC-SHA-256 iteration count applied to newly created hashes.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

const SALT_LEN: usize = 16;
const SUBKEY_LEN: usize = 32;

/// Stateless one-way hasher for administrator secrets.
///
/// Carries no configuration or mutable state; construct it wherever a hash or
/// verification is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Derives a fresh hash for `secret`.
    ///
    /// A new random salt is drawn per call, so hashing the same secret twice
    /// produces different strings; stored hashes are never comparable by
    /// equality.
    pub fn hash(&self, secret: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let mut subkey = [0u8; SUBKEY_LEN];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            NonZeroU32::new(PBKDF2_ITERATIONS).unwrap_or(NonZeroU32::MIN),
            &salt,
            secret.as_bytes(),
            &mut subkey,
        );

        format!(
            "{}.{}.{}",
            PBKDF2_ITERATIONS,
            BASE64.encode(salt),
            BASE64.encode(subkey)
        )
    }

    /// Verifies `candidate` against a previously produced hash string.
    ///
    /// Malformed input (wrong field count, non-numeric iteration count,
    /// invalid base64) yields `false` rather than an error: whether a stored
    /// hash parses is nobody's business but ours. The subkey comparison is
    /// constant-time.
    pub fn verify(&self, stored_hash: &str, candidate: &str) -> bool {
        let mut parts = stored_hash.split('.');
        let (Some(iterations), Some(salt), Some(subkey), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        let Some(iterations) = NonZeroU32::new(iterations) else {
            return false;
        };
        let Ok(salt) = BASE64.decode(salt) else {
            return false;
        };
        let Ok(expected_subkey) = BASE64.decode(subkey) else {
            return false;
        };
        if expected_subkey.is_empty() {
            return false;
        }

        let mut derived = vec![0u8; expected_subkey.len()];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            candidate.as_bytes(),
            &mut derived,
        );

        derived.ct_eq(&expected_subkey).into()
    }
}
