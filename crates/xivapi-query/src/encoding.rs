//! Percent-encoding of query parameters.
//!
//! Builders produce an ordered list of `(name, value)` pairs and hand it to a
//! [`ValueEncoder`] to become a query string. [`PercentEncoder`] is the
//! default and the one the service is exercised with: only the RFC 3986
//! unreserved characters `A-Z a-z 0-9 - . _ ~` pass through, so a space
//! becomes `%20`. [`FormEncoder`] is the `application/x-www-form-urlencoded`
//! variant that writes a space as `+`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved set.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes one query-string component.
pub trait ValueEncoder {
    /// Returns `raw` made safe for use as a key or value in a query string.
    fn encode(&self, raw: &str) -> String;
}

/// Strict percent-encoding; space becomes `%20`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentEncoder;

impl ValueEncoder for PercentEncoder {
    fn encode(&self, raw: &str) -> String {
        utf8_percent_encode(raw, QUERY_COMPONENT).to_string()
    }
}

/// Form encoding; space becomes `+` and everything else as [`PercentEncoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormEncoder;

impl ValueEncoder for FormEncoder {
    fn encode(&self, raw: &str) -> String {
        // A literal "%20" in `raw` is already "%2520" here, so this only hits spaces.
        PercentEncoder.encode(raw).replace("%20", "+")
    }
}

/// Joins `key=value` pairs with `&`, encoding both sides, in the given order.
///
/// # Examples
///
/// ```
/// use xivapi_query::{urlencode, PercentEncoder};
///
/// let pairs = [("sheets", "Item,Action"), ("query", "+Name~\"Fire\"")];
/// assert_eq!(
///     urlencode(&pairs, &PercentEncoder),
///     "sheets=Item%2CAction&query=%2BName~%22Fire%22"
/// );
/// ```
pub fn urlencode<K, V>(pairs: &[(K, V)], encoder: &dyn ValueEncoder) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encoder.encode(key.as_ref()),
                encoder.encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(PercentEncoder.encode("Az09-._~"), "Az09-._~");
    }

    #[test]
    fn test_reserved_are_encoded() {
        assert_eq!(PercentEncoder.encode(" "), "%20");
        assert_eq!(PercentEncoder.encode("\""), "%22");
        assert_eq!(PercentEncoder.encode("+"), "%2B");
        assert_eq!(PercentEncoder.encode(","), "%2C");
        assert_eq!(PercentEncoder.encode("="), "%3D");
        assert_eq!(PercentEncoder.encode("()"), "%28%29");
        assert_eq!(PercentEncoder.encode("/"), "%2F");
    }

    #[test]
    fn test_quote_escape_is_encoded_again() {
        // The grammar's %22 escape survives transport as %2522.
        assert_eq!(PercentEncoder.encode("%22"), "%2522");
    }

    #[test]
    fn test_utf8() {
        assert_eq!(PercentEncoder.encode("é"), "%C3%A9");
    }

    #[test]
    fn test_form_encoder_spaces() {
        assert_eq!(FormEncoder.encode("Lesser Panda"), "Lesser+Panda");
        assert_eq!(FormEncoder.encode("a+b"), "a%2Bb");
        assert_eq!(FormEncoder.encode("100%20"), "100%2520");
    }

    #[test]
    fn test_urlencode_preserves_order() {
        let pairs = vec![("z", "1".to_string()), ("a", "2".to_string())];
        assert_eq!(urlencode(&pairs, &PercentEncoder), "z=1&a=2");
    }

    #[test]
    fn test_urlencode_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(urlencode(&pairs, &PercentEncoder), "");
    }
}
