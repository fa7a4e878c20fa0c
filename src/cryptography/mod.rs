//! Symmetric encryption helpers
//!
//! AES-256-GCM with the key derived as SHA-256 of the passphrase bytes.
//! The wire form is the 12-byte random nonce followed by the ciphertext;
//! message commands hex-encode it, file commands store it raw.

use std::fs;
use std::path::{Path, PathBuf};

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::utils::add_suffix_to_file_name;

/// AES-GCM standard nonce length.
const NONCE_LEN: usize = 12;

/// Length of generated passphrases.
pub const PASSPHRASE_LEN: usize = 50;

const PASSPHRASE_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+-./:;<=>?@[]^_{|}~";

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("encryption failed")]
    Encrypt,
    #[error("decryption failed: wrong passphrase or corrupted input")]
    Decrypt,
    #[error("ciphertext is too short to contain a nonce")]
    Truncated,
}

fn cipher_for(passphrase: &[u8]) -> Aes256Gcm {
    let key: Key<Aes256Gcm> = Sha256::digest(passphrase);
    Aes256Gcm::new(&key)
}

/// Encrypt `plaintext`, returning nonce-prefixed ciphertext.
pub fn encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher_for(passphrase);
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher.encrypt(&nonce, plaintext).map_err(|_| CryptoError::Encrypt)?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(nonce.as_slice());
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt nonce-prefixed ciphertext produced by [`encrypt`].
pub fn decrypt(data: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if data.len() < NONCE_LEN {
        return Err(CryptoError::Truncated);
    }
    let (nonce, ciphertext) = data.split_at(NONCE_LEN);
    let cipher = cipher_for(passphrase);
    cipher.decrypt(Nonce::from_slice(nonce), ciphertext).map_err(|_| CryptoError::Decrypt)
}

/// Encrypt a file. Without an explicit output path the result lands next
/// to the input with an `-encrypted` suffix. Returns the output path.
pub fn encrypt_file(
    path: &Path,
    passphrase: &[u8],
    output: Option<PathBuf>,
) -> Result<PathBuf, Error> {
    let plaintext = fs::read(path)
        .map_err(|e| Error::external(format!("reading {}", path.display()), e))?;
    let data = encrypt(&plaintext, passphrase)
        .map_err(|e| Error::external(format!("encrypting {}", path.display()), e))?;

    let output = output.unwrap_or_else(|| add_suffix_to_file_name(path, "-encrypted"));
    fs::write(&output, data)
        .map_err(|e| Error::external(format!("writing {}", output.display()), e))?;
    Ok(output)
}

/// Decrypt a file produced by [`encrypt_file`]. Without an explicit output
/// path the result lands next to the input with a `-decrypted` suffix.
pub fn decrypt_file(
    path: &Path,
    passphrase: &[u8],
    output: Option<PathBuf>,
) -> Result<PathBuf, Error> {
    let data = fs::read(path)
        .map_err(|e| Error::external(format!("reading {}", path.display()), e))?;
    let plaintext = decrypt(&data, passphrase)
        .map_err(|e| Error::external(format!("decrypting {}", path.display()), e))?;

    let output = output.unwrap_or_else(|| add_suffix_to_file_name(path, "-decrypted"));
    fs::write(&output, plaintext)
        .map_err(|e| Error::external(format!("writing {}", output.display()), e))?;
    Ok(output)
}

/// Generate a printable passphrase of `len` characters.
pub fn generate_passphrase(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| PASSPHRASE_CHARSET[rng.gen_range(0..PASSPHRASE_CHARSET.len())] as char)
        .collect()
}
