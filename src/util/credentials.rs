//! Credential and identifier generation helpers.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generates a random 16-byte account identifier.
pub fn generate_uuid() -> Vec<u8> {
    let mut uuid = vec![0u8; 16];
    rand::rng().fill_bytes(&mut uuid);
    uuid
}

/// Generates a random 16-byte password salt.
pub fn generate_salt() -> Vec<u8> {
    let mut salt = vec![0u8; 16];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Generates a random session token, hex-encoded for transport in the
/// `Authorization` header.
pub fn generate_token() -> String {
    let mut token = [0u8; 32];
    rand::rng().fill_bytes(&mut token);
    hex::encode(token)
}

/// Hashes a password with the account's salt.
pub fn hash_password(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}
