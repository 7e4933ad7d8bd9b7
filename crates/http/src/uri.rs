//! Request-target normalization.
//!
//! Produces the canonical URI form the rest of the engine works with: no
//! leading or trailing slashes, and an empty string when the hosting
//! environment supplied no request target at all. Absence is a handled case,
//! not an error.

/// Normalize a raw request target.
///
/// Strips every leading and trailing `/`, so `"//users//"` and `"/users"`
/// both normalize to `"users"`. `None` and `"/"` both normalize to `""`.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(target) => target.trim_matches('/').to_string(),
        None => String::new(),
    }
}
