use crate::error::{err, Error, Kind, ParserError};
use crate::params::Params;

use super::Parser;

/// Classify why a dotted-quad failed to parse, for error reporting only:
/// this runs once, after the single real parse attempt above has already
/// rejected `input`, purely to pick a more specific [`ParserError`] variant
/// and the offending segment. It never changes what is accepted.
fn classify_ipv4(input: &str) -> (ParserError, &str) {
    if input.is_empty() {
        return (ParserError::EmptyNotAllowed, input);
    }
    // Fixed upper bound: a fifth segment is enough to detect "too many"
    // without an unbounded allocation.
    let mut segments: [&str; 5] = [""; 5];
    let mut count = 0;
    for segment in input.split('.') {
        if count == segments.len() {
            return (ParserError::TooManySegments, input);
        }
        segments[count] = segment;
        count += 1;
    }
    if count < 4 {
        return (ParserError::TooFewSegments, input);
    }
    for &segment in &segments[..count] {
        if segment == "*" {
            return (ParserError::WildcardNotAllowed, segment);
        }
        if segment.contains('-') {
            return (ParserError::InvalidJoinedRanges, segment);
        }
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return (ParserError::InvalidCharacter, segment);
        }
        if segment.len() > 3 {
            return (ParserError::SegmentTooLong, segment);
        }
        if segment.parse::<u16>().map_or(true, |v| v > 255) {
            return (ParserError::SegmentTooLarge, segment);
        }
    }
    (ParserError::InvalidCharacter, input)
}

#[inline(always)]
pub fn parse_addr(input: &str) -> Result<u32, Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv4_octets)
        .ok_or_else(|| {
            let (reason, offending) = classify_ipv4(input);
            err!(Kind::AddressString(reason), offending: offending)
        })
        .map(u32::from_be_bytes)
}

#[inline(always)]
pub fn parse_prefix(input: &str) -> Result<(u32, u8), Error> {
    Parser::new(input)
        .take_with_length(Parser::take_ipv4_octets)
        .ok_or_else(|| {
            let body = input.split('/').next().unwrap_or(input);
            let (reason, offending) = classify_ipv4(body);
            err!(Kind::AddressString(reason), offending: offending)
        })
        .map(|(octets, len)| (u32::from_be_bytes(octets), len))
}

/// Parse a dotted-quad IPv4 subnet expression in which any octet may be a
/// SQL-style `*` wildcard or an `a-b` range (e.g. `"1.2.*.*"`,
/// `"1-2.3.4.5"`), returning the `(lower, upper)` bounds of the resulting
/// address range.
#[inline(always)]
pub fn parse_range(input: &str) -> Result<(u32, u32), Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv4_octet_ranges)
        .ok_or_else(|| err!(Kind::AddressString(ParserError::InvalidJoinedRanges), offending: input))
        .map(|(lower, upper)| (u32::from_be_bytes(lower), u32::from_be_bytes(upper)))
}

/// Parse a dotted-quad IPv4 subnet expression in which any octet may be a
/// SQL-style `*` wildcard or an `a-b` range, returning the per-octet
/// `(lower, upper)` bound arrays rather than collapsing them to a single
/// numeric range. This is the division-wise view consumed by
/// [`crate::concrete::Ipv4Subnet`], as distinct from [`parse_range`]'s
/// sequential-closure view.
#[inline(always)]
pub fn parse_segments(input: &str) -> Result<([u8; 4], [u8; 4]), Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv4_octet_ranges)
        .ok_or_else(|| err!(Kind::AddressString(ParserError::InvalidJoinedRanges), offending: input))
}

/// Parse a single `inet_aton`-style part: decimal by default, `0x`/`0o`
/// hex/octal unconditionally (those prefixes are unambiguous), `0b` binary
/// gated by [`Params::allow_binary`], and a bare leading zero (`010`) gated
/// by [`Params::allow_ipv4_leading_zeros`] (without that flag, a leading
/// zero on a multi-digit part is rejected outright rather than read as
/// decimal, so this can never loosen [`parse_addr`]'s own behavior).
fn parse_ipv4_part(s: &str, params: &Params) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
        return u64::from_str_radix(&s[2..], 16).ok();
    }
    if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'o' | b'O') {
        return u64::from_str_radix(&s[2..], 8).ok();
    }
    if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'b' | b'B') {
        return params.allow_binary.then(|| u64::from_str_radix(&s[2..], 2).ok())?;
    }
    if bytes[0] == b'0' && bytes.len() > 1 {
        return params
            .allow_ipv4_leading_zeros
            .then(|| u64::from_str_radix(s, 8).ok())?;
    }
    u64::from_str_radix(s, 10).ok()
}

/// Parse the classic `inet_aton` 1-, 2-, 3- or 4-part joined forms (`a`,
/// `a.b`, `a.b.c`, `a.b.c.d`), where every part but the last is a single
/// byte and the last part absorbs the remaining width. Returns [`None`] if
/// `input` is not one of these forms, or if the part count requires a
/// [`Params`] flag that is not set.
fn parse_joined(input: &str, params: &Params) -> Option<u32> {
    let mut parts: [&str; 4] = [""; 4];
    let mut count = 0;
    for part in input.split('.') {
        if count == parts.len() {
            return None;
        }
        parts[count] = part;
        count += 1;
    }
    match count {
        1 if !params.allow_single_segment => return None,
        2 | 3 if !params.allow_ipv4_inet_aton_joined => return None,
        0 => return None,
        _ => {}
    }
    let mut acc: u64 = 0;
    for (i, part) in parts[..count].iter().enumerate() {
        let bits = if i + 1 == count {
            8 * (5 - count as u32)
        } else {
            8
        };
        let max = (1u64 << bits) - 1;
        let value = parse_ipv4_part(part, params)?;
        if value > max {
            return None;
        }
        acc = (acc << bits) | value;
    }
    Some(acc as u32)
}

/// Parse an IPv4 address honoring the optional forms enabled by `params`.
/// With [`Params::strict`] this behaves exactly like [`parse_addr`] (and is
/// attempted through the exact same code path, so strict behavior can never
/// drift from it).
#[inline]
pub fn parse_addr_with(input: &str, params: &Params) -> Result<u32, Error> {
    if input.is_empty() {
        return if params.allow_empty {
            Ok(0)
        } else {
            let (reason, offending) = classify_ipv4(input);
            Err(err!(Kind::AddressString(reason), offending: offending))
        };
    }
    let permissive = params.allow_ipv4_inet_aton_joined
        || params.allow_ipv4_leading_zeros
        || params.allow_binary
        || params.allow_single_segment;
    if permissive {
        if let Some(addr) = parse_joined(input, params) {
            return Ok(addr);
        }
    }
    parse_addr(input)
}

/// [`parse_segments`], additionally accepting a standalone whole-address
/// wildcard (gated by [`Params::allow_all_wildcard`]) ahead of the per-octet
/// grammar.
#[inline]
pub fn parse_segments_with(input: &str, params: &Params) -> Result<([u8; 4], [u8; 4]), Error> {
    if params.allow_all_wildcard && input.as_bytes() == [params.wildcard_char] {
        return Ok(([0; 4], [255; 4]));
    }
    parse_segments(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ipv4_addr() {
        let input = "10.1.1.1";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x0a01_0101);
    }

    #[test]
    fn parse_wildcard_octets() {
        let (lo, hi) = parse_range("1.2.*.*").unwrap();
        assert_eq!(lo, 0x0102_0000);
        assert_eq!(hi, 0x0102_ffff);
    }

    #[test]
    fn parse_leading_octet_range() {
        let (lo, hi) = parse_range("1-2.3.4.5").unwrap();
        assert_eq!(lo, 0x0103_0405);
        assert_eq!(hi, 0x0203_0405);
    }

    #[test]
    fn parse_inner_octet_range() {
        let (lo, hi) = parse_range("1.2-3.4.5").unwrap();
        assert_eq!(lo, 0x0102_0405);
        assert_eq!(hi, 0x0103_0405);
    }

    #[test]
    fn parse_exact_range_collapses() {
        let (lo, hi) = parse_range("10.1.1.1").unwrap();
        assert_eq!(lo, hi);
        assert_eq!(lo, 0x0a01_0101);
    }

    #[test]
    fn reject_inverted_range() {
        assert!(parse_range("5-1.0.0.0").is_err());
    }

    #[test]
    fn empty_octets() {
        let input = "...";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn disallow_octal() {
        let input = "1.01.0.0";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn strict_params_matches_parse_addr_exactly() {
        let input = "1.01.0.0";
        assert_eq!(
            parse_addr_with(input, &Params::strict()).is_err(),
            parse_addr(input).is_err()
        );
        let input = "10.1.1.1";
        assert_eq!(
            parse_addr_with(input, &Params::strict()).unwrap(),
            parse_addr(input).unwrap()
        );
    }

    #[test]
    fn permissive_params_accepts_leading_zero_octal() {
        let addr = parse_addr_with("1.010.0.0", &Params::permissive()).unwrap();
        assert_eq!(addr, 0x0108_0000);
    }

    #[test]
    fn non_permissive_leading_zero_flag_still_rejects() {
        let mut params = Params::permissive();
        params.allow_ipv4_leading_zeros = false;
        assert!(parse_addr_with("1.010.0.0", &params).is_err());
    }

    #[test]
    fn permissive_params_accepts_binary_octet() {
        let addr = parse_addr_with("1.0b00000010.0.0", &Params::permissive()).unwrap();
        assert_eq!(addr, 0x0102_0000);
    }

    #[test]
    fn permissive_params_accepts_inet_aton_two_part() {
        // 1.0x10203 == 1.1.2.3
        let addr = parse_addr_with("1.0x10203", &Params::permissive()).unwrap();
        assert_eq!(addr, 0x0101_0203);
    }

    #[test]
    fn permissive_params_accepts_single_segment() {
        let addr = parse_addr_with("0x01020304", &Params::permissive()).unwrap();
        assert_eq!(addr, 0x0102_0304);
    }

    #[test]
    fn two_part_form_rejected_without_inet_aton_flag() {
        let mut params = Params::permissive();
        params.allow_ipv4_inet_aton_joined = false;
        assert!(parse_addr_with("1.0x10203", &params).is_err());
    }

    #[test]
    fn empty_input_rejected_without_allow_empty() {
        assert!(parse_addr_with("", &Params::strict()).is_err());
    }

    #[test]
    fn empty_input_accepted_with_allow_empty() {
        assert_eq!(parse_addr_with("", &Params::permissive()).unwrap(), 0);
    }

    #[test]
    fn whole_address_wildcard_requires_flag() {
        assert!(parse_segments_with("*", &Params::strict()).is_err());
        let (lo, hi) = parse_segments_with("*", &Params::permissive()).unwrap();
        assert_eq!(lo, [0; 4]);
        assert_eq!(hi, [255; 4]);
    }

    #[test]
    fn consume_all_input() {
        let input = "192.168.0.1\0";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[cfg(feature = "std")]
    mod proptests {
        use std::net::Ipv4Addr;
        use std::string::ToString;

        use proptest::{arbitrary::any, proptest};

        use crate::concrete::Address;

        use super::*;

        proptest! {
            #[test]
            fn parse_any_ipv4_addr(addr in any::<Ipv4Addr>()) {
                let addr_num: u32 = addr.into();
                let addr_parsed = parse_addr(&addr.to_string()).unwrap();
                assert_eq!(addr_num, addr_parsed);
            }
        }

        proptest! {
            #[test]
            fn parse_any_utf8(s in r"\PC*") {
                let stdlib: Option<Ipv4Addr> = s.parse().ok();
                assert_eq!(parse_addr(&s).map(Address::new).ok(), stdlib.map(Address::from));
            }
        }

        #[cfg(feature = "ipnet")]
        use ipnet::Ipv4Net;

        #[cfg(feature = "ipnet")]
        proptest! {
            #[test]
            fn parse_any_ipv4_prefix(addr in any::<Ipv4Addr>(), len in 0..=32u8) {
                let prefix = Ipv4Net::new(addr, len).unwrap().trunc();
                let prefix_nums = (prefix.network().into(), prefix.prefix_len());
                let prefix_parsed = parse_prefix(&prefix.to_string()).unwrap();
                assert_eq!(prefix_nums, prefix_parsed);
            }
        }
    }
}
