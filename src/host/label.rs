//! Validation of the label-sequence form of a host name (RFC 952, 1035,
//! 1123 and 5890).

use std::string::String;
use std::vec::Vec;

use crate::error::{err, Error, Kind};

/// The maximum total length, in bytes, of a host name's label sequence
/// (RFC 1035 §3.1).
const MAX_NAME_LEN: usize = 253;
/// The maximum length, in bytes, of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Split `name` into its dot-separated labels, validating each one and the
/// sequence as a whole.
///
/// Internationalized labels (containing non-ASCII bytes) are accepted
/// verbatim: this crate does not perform Punycode/IDNA normalization, since
/// that is host-resolver territory, not address-parsing territory.
pub(super) fn split_and_validate(name: &str) -> Result<Vec<String>, Error> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(err!(Kind::HostName, "host name is empty"));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(err!(Kind::HostName, "host name exceeds 253 bytes"));
    }
    trimmed
        .split('.')
        .map(|label| {
            validate_label(label)?;
            Ok(label.into())
        })
        .collect()
}

fn validate_label(label: &str) -> Result<(), Error> {
    if label.is_empty() {
        return Err(err!(Kind::HostName, "empty label"));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(err!(Kind::HostName, "label exceeds 63 bytes"));
    }
    let bytes = label.as_bytes();
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return Err(err!(Kind::HostName, "label has a leading or trailing hyphen"));
    }
    let all_ascii = bytes.iter().all(u8::is_ascii);
    if all_ascii
        && !bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'-')
    {
        return Err(err!(Kind::HostName, "invalid character in label"));
    }
    Ok(())
}

/// Returns [`true`] if the (already-validated) label sequence is a
/// reverse-DNS name (`…in-addr.arpa` or `…ip6.arpa`).
pub(super) fn is_reverse_dns(labels: &[String]) -> bool {
    matches!(
        labels.last().map(String::as_str),
        Some("arpa" | "ARPA")
    ) && labels
        .get(labels.len().wrapping_sub(2))
        .is_some_and(|label| label.eq_ignore_ascii_case("in-addr") || label.eq_ignore_ascii_case("ip6"))
}

/// Returns [`true`] if the label sequence is a Microsoft UNC IPv6 literal
/// host name (`…ipv6-literal.net`, with `-` standing in for `:` and `s`
/// standing in for `%`), as produced by Windows file-sharing paths.
pub(super) fn is_unc_ipv6_literal(labels: &[String]) -> bool {
    labels
        .last()
        .is_some_and(|label| label.eq_ignore_ascii_case("net"))
        && labels
            .get(labels.len().wrapping_sub(2))
            .is_some_and(|label| label.eq_ignore_ascii_case("ipv6-literal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_name() {
        let labels = split_and_validate("example.com").unwrap();
        assert_eq!(labels, vec!["example", "com"]);
    }

    #[test]
    fn accepts_trailing_dot() {
        let labels = split_and_validate("example.com.").unwrap();
        assert_eq!(labels, vec!["example", "com"]);
    }

    #[test]
    fn rejects_empty_label() {
        assert!(split_and_validate("example..com").is_err());
    }

    #[test]
    fn rejects_leading_hyphen() {
        assert!(split_and_validate("-example.com").is_err());
    }

    #[test]
    fn rejects_label_over_63_bytes() {
        let long = "a".repeat(64);
        assert!(split_and_validate(&long).is_err());
    }

    #[test]
    fn rejects_name_over_253_bytes() {
        let label = "a".repeat(50);
        let long = [label.as_str(); 6].join(".");
        assert!(split_and_validate(&long).is_err());
    }

    #[test]
    fn accepts_internationalized_label_verbatim() {
        assert!(split_and_validate("café.example").is_ok());
    }

    #[test]
    fn detects_reverse_dns_ipv4() {
        let labels = split_and_validate("1.2.3.4.in-addr.arpa").unwrap();
        assert!(is_reverse_dns(&labels));
    }

    #[test]
    fn detects_reverse_dns_ipv6() {
        let labels = split_and_validate("1.0.0.0.ip6.arpa").unwrap();
        assert!(is_reverse_dns(&labels));
    }

    #[test]
    fn plain_name_is_not_reverse_dns() {
        let labels = split_and_validate("example.com").unwrap();
        assert!(!is_reverse_dns(&labels));
    }

    #[test]
    fn detects_unc_ipv6_literal() {
        let labels = split_and_validate("fe80-0-0-0-a00-27ff-fe44-0.ipv6-literal.net").unwrap();
        assert!(is_unc_ipv6_literal(&labels));
    }
}
