//! License types and the verified license entity.

use crate::codec::encode_hex;
use crate::envelope::{render_envelope, Envelope};
use crate::error::{LicenseError, LicenseResult};
use crate::verifier::LicenseVerifier;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The kind of license (numbering shared with the issuer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseType {
    /// A single named user.
    SingleUser = 0,
    /// Commercial use within an organization.
    Commercial = 1,
    /// Free use by an open-source project.
    OpenSource = 2,
}

impl LicenseType {
    /// Every license type, in numeric order.
    pub const ALL: [LicenseType; 3] = [Self::SingleUser, Self::Commercial, Self::OpenSource];

    /// Returns the type with the given number, if there is one.
    #[must_use]
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::SingleUser),
            1 => Some(Self::Commercial),
            2 => Some(Self::OpenSource),
            _ => None,
        }
    }

    /// Returns the number that appears in license blocks and signed data.
    #[must_use]
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SingleUser => "Single User",
            Self::Commercial => "Commercial",
            Self::OpenSource => "Open Source",
        }
    }
}

impl TryFrom<i64> for LicenseType {
    type Error = LicenseError;

    fn try_from(value: i64) -> LicenseResult<Self> {
        Self::from_value(value)
            .ok_or_else(|| LicenseError::format(format!("unknown license type {value}")))
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed license and the outcome of its signature check.
///
/// A license whose signature does not match is still returned; check
/// [`License::is_valid`] before granting anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    licensee: String,
    #[serde(rename = "type")]
    license_type: LicenseType,
    #[serde(serialize_with = "serialize_hex")]
    signature: Vec<u8>,
    is_valid: bool,
}

impl License {
    /// Creates a license and verifies it against the embedded public key.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidArgument`] if `licensee` is empty.
    pub fn new(
        licensee: impl Into<String>,
        license_type: LicenseType,
        signature: impl Into<Vec<u8>>,
    ) -> LicenseResult<Self> {
        Self::new_with_verifier(licensee, license_type, signature, &LicenseVerifier::default())
    }

    /// Creates a license and verifies it with the given verifier.
    ///
    /// The signature content never causes an error; an empty or malformed
    /// signature just produces an invalid license.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidArgument`] if `licensee` is empty.
    pub fn new_with_verifier(
        licensee: impl Into<String>,
        license_type: LicenseType,
        signature: impl Into<Vec<u8>>,
        verifier: &LicenseVerifier,
    ) -> LicenseResult<Self> {
        let licensee = licensee.into();
        if licensee.is_empty() {
            return Err(LicenseError::InvalidArgument(
                "licensee must not be empty".to_string(),
            ));
        }

        let signature = signature.into();
        let is_valid = verifier.verify(&licensee, license_type, &signature);

        Ok(Self {
            licensee,
            license_type,
            signature,
            is_valid,
        })
    }

    /// Parses a license block and verifies it against the embedded public key.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidFormat`] if the text is not a well-formed
    /// license block. A bad signature is not an error.
    pub fn parse(text: &str) -> LicenseResult<Self> {
        Self::parse_with_verifier(text, &LicenseVerifier::default())
    }

    /// Parses a license block and verifies it with the given verifier.
    /// Used for testing with a generated key pair.
    pub fn parse_with_verifier(text: &str, verifier: &LicenseVerifier) -> LicenseResult<Self> {
        let Envelope {
            licensee,
            license_type,
            signature,
        } = Envelope::parse(text)?;

        let license = Self::new_with_verifier(licensee, license_type, signature, verifier)?;
        debug!(
            license_type = %license.license_type,
            valid = license.is_valid,
            "license parsed"
        );
        Ok(license)
    }

    /// Returns the licensee exactly as written in the block.
    #[must_use]
    pub fn licensee(&self) -> &str {
        &self.licensee
    }

    /// Returns the license type.
    #[must_use]
    pub fn license_type(&self) -> LicenseType {
        self.license_type
    }

    /// Returns the raw signature bytes.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Returns true if the signature was made by the issuer's private key.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Renders this license as a text block.
    #[must_use]
    pub fn to_envelope(&self) -> String {
        render_envelope(&self.licensee, self.license_type, &self.signature)
    }
}

impl FromStr for License {
    type Err = LicenseError;

    fn from_str(s: &str) -> LicenseResult<Self> {
        Self::parse(s)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_hex(bytes))
}
