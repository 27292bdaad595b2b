//! Offline verification of text-block licenses.
//!
//! A license is a human-copyable block of text:
//!
//! ```text
//! -----BEGIN LICENSE-----
//! Jane Doe
//! 1
//! 4f3a9b...
//! -----END LICENSE-----
//! ```
//!
//! It carries a licensee name, a [`LicenseType`], and an RSA signature
//! (SHA-1, PKCS#1 v1.5) over the canonical licensee followed by the type
//! digits. Verification is purely local: the public key is compiled into
//! the crate and nothing is fetched or persisted.
//!
//! # Design Principles
//!
//! - **Structure vs. authenticity**: a malformed block is an error, a forged
//!   one is not. Forged licenses parse and report `is_valid() == false`.
//! - **Closed license types**: an unknown type number is rejected while
//!   parsing, so an invalid [`LicenseType`] can never exist.
//! - **Injected key**: [`LicenseVerifier`] owns its [`PublicKey`], which lets
//!   tests swap in their own key without touching production paths.
//!
//! # Example
//!
//! ```no_run
//! use licblock_license::License;
//!
//! let text = std::fs::read_to_string("license.txt").unwrap();
//! let license = License::parse(&text).unwrap();
//! if license.is_valid() {
//!     println!("licensed to {} ({})", license.licensee(), license.license_type());
//! }
//! ```

mod canonical;
mod codec;
mod envelope;
mod error;
mod key;
mod license;
mod verifier;

pub use canonical::canonicalize;
pub use codec::{decode_hex, encode_hex};
pub use envelope::{render_envelope, Envelope, SIGNATURE_LINE_WIDTH};
pub use error::{LicenseError, LicenseResult};
pub use key::PublicKey;
pub use license::{License, LicenseType};
pub use verifier::{signed_buffer, LicenseVerifier};
