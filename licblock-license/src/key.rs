//! RSA public key material used to check license signatures.
//!
//! Only the raw modulus and exponent are kept. The RSA key object itself is
//! imported by [`LicenseVerifier`](crate::LicenseVerifier) for the duration of
//! a single verification and dropped straight after.

use crate::error::{LicenseError, LicenseResult};
use base64::{engine::general_purpose::STANDARD, Engine};
use rsa::{BigUint, RsaPublicKey};

/// Embedded RSA-1024 modulus for production license verification (big-endian).
const LICENSE_PUBLIC_MODULUS: [u8; 128] = [
    240, 34, 167, 239, 196, 72, 234, 30, 239, 52, 227, 204, 120, 192, 158, 68,
    33, 222, 128, 72, 6, 214, 116, 126, 95, 206, 1, 241, 189, 236, 57, 145,
    122, 132, 8, 195, 92, 95, 52, 106, 13, 89, 195, 84, 244, 19, 227, 85,
    30, 102, 207, 7, 198, 139, 129, 19, 230, 64, 240, 55, 231, 86, 81, 240,
    63, 129, 8, 122, 40, 14, 81, 170, 178, 210, 203, 30, 42, 147, 187, 214,
    219, 169, 21, 79, 182, 46, 58, 92, 23, 163, 187, 113, 91, 139, 142, 222,
    184, 239, 168, 152, 125, 44, 171, 178, 194, 184, 134, 121, 179, 85, 129, 153,
    55, 61, 122, 57, 36, 125, 207, 244, 174, 77, 223, 1, 134, 136, 70, 225,
];

/// Embedded public exponent (65537).
const LICENSE_PUBLIC_EXPONENT: [u8; 3] = [1, 0, 1];

/// RSA public key material (big-endian modulus and exponent).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    modulus: Vec<u8>,
    exponent: Vec<u8>,
}

impl PublicKey {
    /// Returns the key that production licenses are signed for.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_components(&LICENSE_PUBLIC_MODULUS, &LICENSE_PUBLIC_EXPONENT)
    }

    /// Creates key material from big-endian modulus and exponent bytes.
    ///
    /// No validation happens here; unusable material makes every
    /// verification fail.
    #[must_use]
    pub fn from_components(modulus: &[u8], exponent: &[u8]) -> Self {
        Self {
            modulus: modulus.to_vec(),
            exponent: exponent.to_vec(),
        }
    }

    /// Reads key material from an `<RSAKeyValue>` XML document with base64
    /// `<Modulus>` and `<Exponent>` elements, as exported by .NET key tools.
    ///
    /// Any private-key elements in the document are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidPublicKey`] if the root element or one of
    /// the two elements is missing, or a value is not valid base64.
    pub fn from_xml(xml: &str) -> LicenseResult<Self> {
        let root = element_text(xml, "RSAKeyValue")?;
        let modulus = decode_element(root, "Modulus")?;
        let exponent = decode_element(root, "Exponent")?;
        Ok(Self { modulus, exponent })
    }

    /// Returns the big-endian modulus bytes.
    #[must_use]
    pub fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    /// Returns the big-endian public exponent bytes.
    #[must_use]
    pub fn exponent(&self) -> &[u8] {
        &self.exponent
    }

    /// Returns the modulus size in bits, ignoring leading zero bytes.
    #[must_use]
    pub fn bits(&self) -> usize {
        BigUint::from_bytes_be(&self.modulus).bits()
    }

    /// Imports the material as an RSA key.
    pub(crate) fn import(&self) -> LicenseResult<RsaPublicKey> {
        RsaPublicKey::new(
            BigUint::from_bytes_be(&self.modulus),
            BigUint::from_bytes_be(&self.exponent),
        )
        .map_err(|e| LicenseError::InvalidPublicKey(e.to_string()))
    }
}

impl Default for PublicKey {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

fn element_text<'a>(xml: &'a str, tag: &str) -> LicenseResult<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = xml
        .find(&open)
        .map(|i| i + open.len())
        .ok_or_else(|| LicenseError::InvalidPublicKey(format!("missing <{tag}> element")))?;
    let len = xml[start..]
        .find(&close)
        .ok_or_else(|| LicenseError::InvalidPublicKey(format!("unterminated <{tag}> element")))?;
    Ok(&xml[start..start + len])
}

fn decode_element(xml: &str, tag: &str) -> LicenseResult<Vec<u8>> {
    let text: String = element_text(xml, tag)?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    STANDARD
        .decode(text)
        .map_err(|e| LicenseError::InvalidPublicKey(format!("<{tag}> is not valid base64: {e}")))
}
