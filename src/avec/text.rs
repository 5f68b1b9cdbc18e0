//! Base64 text decoder implementation.
//!
//! _Requires Cargo feature `base64`._

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::model::LocationReference;

use super::{Error, slice};

/// Decode a location reference from padded, standard alphabet base64 text.
///
/// This method is also re-exported as `openlr_binary::decode_base64`.
///
/// _Requires Cargo feature `base64`._
pub fn decode(text: &str) -> Result<LocationReference, Error> {
    let r = STANDARD.decode(text)?;

    slice::decode(&r)
}
