//! Sealing of values kept on the device.
//!
//! Sealed layout: `nonce (24 bytes) || XChaCha20-Poly1305 ciphertext`.
//! Associated data is authenticated but not stored; `open` must be given
//! the same bytes `seal` was.

use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{KDF_CONTEXT_STORAGE_KEY, NONCE_SIZE, SYMMETRIC_KEY_SIZE};
use crate::error::CryptoError;

pub type SymmetricKey = [u8; SYMMETRIC_KEY_SIZE];

pub fn generate_key() -> SymmetricKey {
    let mut key = [0u8; SYMMETRIC_KEY_SIZE];
    OsRng.fill_bytes(&mut key);
    key
}

pub fn key_from_slice(bytes: &[u8]) -> Result<SymmetricKey, CryptoError> {
    bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength)
}

/// A cipher bound to one key. Every `seal` draws a fresh random nonce.
pub struct Sealer {
    cipher: XChaCha20Poly1305,
}

impl Sealer {
    pub fn new(key: &SymmetricKey) -> Self {
        Self {
            cipher: XChaCha20Poly1305::new(key.into()),
        }
    }

    /// Seal `plaintext`, binding it to `aad`.
    pub fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, Payload { msg: plaintext, aad })
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut sealed = nonce.to_vec();
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    pub fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if sealed.len() < NONCE_SIZE {
            return Err(CryptoError::DecryptionFailed);
        }
        let (nonce, ciphertext) = sealed.split_at(NONCE_SIZE);
        self.cipher
            .decrypt(XNonce::from_slice(nonce), Payload { msg: ciphertext, aad })
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}

/// Derive the key that seals secure-storage values from the device secret.
pub fn derive_storage_key(device_secret: &[u8]) -> SymmetricKey {
    blake3::derive_key(KDF_CONTEXT_STORAGE_KEY, device_secret)
}
