//! Conversions between hexadecimal strings and URL-safe base64
//!
//! Encoding pads with `=` by default. Decoding accepts padded and unpadded
//! input alike.

use crate::error::{ConversionError, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::prelude::{BASE64_URL_SAFE, BASE64_URL_SAFE_NO_PAD};
use base64::Engine;

/// URL-safe decoder that does not care whether padding is present
const URL_SAFE_ANY_PADDING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Whether encoded base64 output carries trailing `=` characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    #[default]
    Padded,
    Unpadded,
}

impl From<bool> for Padding {
    fn from(pad: bool) -> Self {
        if pad {
            Padding::Padded
        } else {
            Padding::Unpadded
        }
    }
}

/// Re-encode a hex string as padded URL-safe base64
///
/// ```
/// use vr_extras::utils::encoding::hex_to_base64url;
///
/// assert_eq!(hex_to_base64url("fbff").unwrap(), "-_8=");
/// ```
pub fn hex_to_base64url(hex: &str) -> Result<String> {
    hex_to_base64url_with(hex, Padding::Padded)
}

/// Re-encode a hex string as URL-safe base64 with the requested padding
pub fn hex_to_base64url_with(hex: &str, padding: Padding) -> Result<String> {
    let bytes = hex::decode(hex).map_err(|e| {
        log::debug!("Rejected hex input '{}': {}", hex, e);
        ConversionError::encoding(hex, e)
    })?;

    let encoded = match padding {
        Padding::Padded => BASE64_URL_SAFE.encode(&bytes),
        Padding::Unpadded => BASE64_URL_SAFE_NO_PAD.encode(&bytes),
    };
    log::trace!("Encoded {} bytes as base64url", bytes.len());
    Ok(encoded)
}

/// Decode URL-safe base64 (padding optional) into a lowercase hex string
///
/// ```
/// use vr_extras::utils::encoding::base64url_to_hex;
///
/// assert_eq!(base64url_to_hex("-_8=").unwrap(), "fbff");
/// assert_eq!(base64url_to_hex("-_8").unwrap(), "fbff");
/// ```
pub fn base64url_to_hex(b64url: &str) -> Result<String> {
    let bytes = URL_SAFE_ANY_PADDING.decode(b64url).map_err(|e| {
        log::debug!("Rejected base64url input '{}': {}", b64url, e);
        ConversionError::encoding(b64url, e)
    })?;

    log::trace!("Decoded {} bytes from base64url", bytes.len());
    Ok(hex::encode(bytes))
}
