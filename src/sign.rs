use chrono::Local;

use crate::params::CommonParameters;

/// Format of the `timestamp` parameter, e.g. `2024-01-01 00:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time, formatted for the `timestamp` parameter.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the string the signature is computed over.
///
/// The secret wraps the concatenation of every `key + value` pair in ascending key order,
/// it is both prefixed and suffixed.
pub fn canonical_string(params: &CommonParameters, secret: &str) -> String {
    let mut combined = String::from(secret);
    for (key, value) in params.iter() {
        combined.push_str(key);
        combined.push_str(value);
    }
    combined.push_str(secret);
    combined
}

/// Represents a request signature, sent as the `sign` parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sign {
    /// The resulting hash as uppercase hexadecimal String
    pub hash: String,
}

impl Sign {
    /// Signs the common parameters of a request with the application secret.
    pub fn new(params: &CommonParameters, secret: &str) -> Sign {
        Sign::from_canonical(&canonical_string(params, secret))
    }

    /// Computes the signature of an already built canonical string.
    pub fn from_canonical(canonical: &str) -> Sign {
        Sign {
            hash: format!("{:X}", md5::compute(canonical.as_bytes())),
        }
    }
}

impl std::fmt::UpperHex for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(&self.hash)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(&self.hash)
    }
}
