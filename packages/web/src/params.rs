//! Query-string and form parameters as ordered pairs.
//!
//! Decoding into a struct rejects a repeated key with a bare 400. Browsers and
//! hand-edited URLs do send repeats, so handlers extract
//! `Query<Pairs>` / `Form<Pairs>` and take the first value of each key.

/// Decoded `key=value` pairs in request order.
pub type Pairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored.
pub fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
