//! Signature verification for license fields.
//!
//! The issuer signs `canonicalize(licensee) + type digits` as UTF-8, with
//! RSA PKCS#1 v1.5 over a SHA-1 digest. Both the concatenation and the
//! digest are fixed by licenses already in circulation.

use crate::canonical::canonicalize;
use crate::key::PublicKey;
use crate::license::LicenseType;
use rsa::Pkcs1v15Sign;
use sha1::{Digest, Sha1};
use tracing::{debug, trace, warn};

/// Builds the exact byte buffer the issuer signs.
///
/// `("Erika Mustermann", OpenSource)` becomes `b"ERIKAMUSTERMANN2"`.
#[must_use]
pub fn signed_buffer(licensee: &str, license_type: LicenseType) -> Vec<u8> {
    format!("{}{}", canonicalize(licensee), license_type.value()).into_bytes()
}

/// Checks license signatures against one public key.
#[derive(Debug, Clone, Default)]
pub struct LicenseVerifier {
    public_key: PublicKey,
}

impl LicenseVerifier {
    /// Creates a verifier for the given key.
    #[must_use]
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Returns the key this verifier checks against.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns true if `signature` was made over the license fields by the
    /// holder of the matching private key.
    ///
    /// Never fails: unusable key material and malformed signatures both
    /// yield `false`.
    #[must_use]
    pub fn verify(&self, licensee: &str, license_type: LicenseType, signature: &[u8]) -> bool {
        let buffer = signed_buffer(licensee, license_type);
        trace!(buffer = %String::from_utf8_lossy(&buffer), "verifying license signature");

        // Imported per call; dropped when this function returns.
        let key = match self.public_key.import() {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "license public key could not be imported");
                return false;
            }
        };

        let digest = Sha1::digest(&buffer);
        match key.verify(Pkcs1v15Sign::new::<Sha1>(), &digest, signature) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, signature_len = signature.len(), "license signature rejected");
                false
            }
        }
    }
}
