//! Request signing for the AliExpress gateway.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Value sent as `sign_method`.
pub const SIGN_METHOD: &str = "sha256";

/// Sign a complete parameter set (system and business parameters).
///
/// Parameters are sorted by key, concatenated as `key + value` with no
/// separator, and authenticated with HMAC-SHA256 keyed by the app secret.
/// Returns the upper-case hex digest. The `sign` parameter itself, if
/// present, is excluded.
pub fn sign(params: &BTreeMap<String, String>, app_secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(app_secret.as_bytes()).expect("HMAC accepts any key length");

    for (key, value) in params.iter().filter(|(k, _)| k.as_str() != "sign") {
        mac.update(key.as_bytes());
        mac.update(value.as_bytes());
    }

    hex::encode_upper(mac.finalize().into_bytes())
}
