//! Query-string encoding.

/// Form-encodes `params` as `k1=v1&k2=v2`, percent-encoding keys and values.
///
/// Pairs keep their given order. An empty slice yields an empty string.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
