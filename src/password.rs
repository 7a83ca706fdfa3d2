//! Password hashing and verification.
//!
//! Passwords are stored as `<salt-hex>$<digest-hex>` where the digest is
//! SHA-256 over the salt followed by the password bytes. The salt is 16
//! random bytes, so identical passwords hash to different strings.

use sha2::{Digest, Sha256};

/// Hash a password with a fresh random salt.
///
/// # Output
///
/// `"<32 hex chars>$<64 hex chars>"` — salt and digest, both hex-encoded.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Check a password against a stored `salt$digest` string.
///
/// Returns false for malformed stored values instead of erroring; a bad
/// row in the users table must read as a failed login, not a 500.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    hex::encode(digest_with_salt(&salt, password)) == digest_hex
}

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
