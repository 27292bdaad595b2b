//! The `BEGIN LICENSE` / `END LICENSE` text block.
//!
//! ```text
//! -----BEGIN LICENSE-----
//! <licensee>
//! <license type number>
//! <signature hex, one or more lines>
//! -----END LICENSE-----
//! ```
//!
//! Markers are case-insensitive and may use any number of dashes. Whitespace
//! inside the signature lines is ignored, so wrapped or hand-copied blocks
//! still parse.

use crate::codec::{decode_hex, encode_hex};
use crate::error::{LicenseError, LicenseResult};
use crate::license::LicenseType;
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Number of hex characters per signature line in rendered blocks.
pub const SIGNATURE_LINE_WIDTH: usize = 64;

static ENVELOPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*-+BEGIN LICENSE-+(?P<data>.*?)-+END LICENSE-+\s*$")
        .expect("envelope pattern compiles")
});

/// The fields of a structurally valid license block, before verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Licensee line, trimmed.
    pub licensee: String,
    /// License type from the second line.
    pub license_type: LicenseType,
    /// Decoded signature bytes (possibly empty).
    pub signature: Vec<u8>,
}

impl Envelope {
    /// Splits a license block into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidFormat`] if the markers are missing, the
    /// block has fewer than three lines, the type line is not one of the
    /// known license type numbers, or the signature is not valid hex.
    pub fn parse(text: &str) -> LicenseResult<Self> {
        let result = Self::parse_fields(text);
        if let Err(e) = &result {
            debug!(error = %e, "license block rejected");
        }
        result
    }

    fn parse_fields(text: &str) -> LicenseResult<Self> {
        // `\s` in the pattern is ASCII-only; the outer trim covers other whitespace.
        let data = ENVELOPE_PATTERN
            .captures(text.trim())
            .and_then(|caps| caps.name("data"))
            .map(|m| m.as_str().trim())
            .ok_or_else(|| LicenseError::format("missing BEGIN LICENSE / END LICENSE markers"))?;

        if data.is_empty() {
            return Err(LicenseError::format("license block is empty"));
        }

        let lines: Vec<&str> = data.split('\n').collect();
        if lines.len() < 3 {
            return Err(LicenseError::format(format!(
                "expected licensee, type and signature lines, found {} line(s)",
                lines.len()
            )));
        }

        let licensee = lines[0].trim().to_string();

        let type_line = lines[1].trim();
        let type_value: i64 = type_line.parse().map_err(|_| {
            LicenseError::format(format!("license type {type_line:?} is not an integer"))
        })?;
        let license_type = LicenseType::try_from(type_value)?;

        let signature_hex: String = lines[2..]
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let signature = decode_hex(&signature_hex)?;

        Ok(Self {
            licensee,
            license_type,
            signature,
        })
    }

    /// Renders the fields back into a license block.
    #[must_use]
    pub fn render(&self) -> String {
        render_envelope(&self.licensee, self.license_type, &self.signature)
    }
}

/// Renders a license block in the layout issuers produce.
///
/// The signature is written as lowercase hex wrapped at
/// [`SIGNATURE_LINE_WIDTH`] characters. A block rendered with an empty
/// signature or a multi-line licensee will not parse.
#[must_use]
pub fn render_envelope(licensee: &str, license_type: LicenseType, signature: &[u8]) -> String {
    let hex = encode_hex(signature);
    let mut out = String::with_capacity(hex.len() + licensee.len() + 64);
    out.push_str("-----BEGIN LICENSE-----\n");
    out.push_str(licensee);
    out.push('\n');
    out.push_str(&license_type.value().to_string());
    out.push('\n');
    let mut rest = hex.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(SIGNATURE_LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    out.push_str("-----END LICENSE-----\n");
    out
}
