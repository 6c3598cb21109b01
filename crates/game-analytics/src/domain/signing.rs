//! # Body Encoding & Signing
//!
//! The collector authenticates a submission by recomputing an HMAC over the
//! bytes it receives, so the signature is taken over the *compressed* body,
//! never over the plaintext JSON.
//!
//! ## Wire Properties
//!
//! - **Compression**: gzip member, default DEFLATE level, mtime 0, OS byte 3 (Unix)
//! - **Signature**: HMAC-SHA256 keyed with the game's secret key
//! - **Encoding**: standard base64 alphabet with `=` padding

use std::io::Write;

use base64::{engine::general_purpose, Engine as _};
use flate2::{write::GzEncoder, Compression, GzBuilder};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// gzip OS header byte for Unix.
const GZIP_OS_UNIX: u8 = 3;

/// Gzip-compress `data` into a single gzip member.
pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder: GzEncoder<Vec<u8>> = GzBuilder::new()
        .operating_system(GZIP_OS_UNIX)
        .write(Vec::with_capacity(data.len() + 32), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Raw HMAC-SHA256 digest of `message` under `secret`.
pub fn hmac_sha256(message: &[u8], secret: &[u8]) -> [u8; 32] {
    // HMAC accepts keys of any length.
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Value of the `Authorization` header for a compressed body.
pub fn authorization(body: &[u8], secret: &str) -> String {
    general_purpose::STANDARD.encode(hmac_sha256(body, secret.as_bytes()))
}
