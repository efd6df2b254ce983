use crate::error::{err, Error, Kind, ParserError};
use crate::params::Params;

use super::Parser;

/// The RFC 1924 base-85 digit alphabet, in value order.
const BASE85_ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Decode an RFC 1924 base-85 literal (exactly 20 digits) into its `u128`
/// value, rejecting both out-of-alphabet characters and values that
/// overflow the 128-bit address space (the alphabet's 85^20 combinations
/// slightly exceed 2^128).
fn decode_base85(s: &str) -> Option<u128> {
    let mut value: u128 = 0;
    for &b in s.as_bytes() {
        let digit = BASE85_ALPHABET.iter().position(|&c| c == b)? as u128;
        value = value.checked_mul(85)?.checked_add(digit)?;
    }
    Some(value)
}

/// Parse an IPv6 literal with no colons at all: an RFC 1924 base-85 value
/// (gated by [`Params::allow_ipv6_base85`]), a `0b`-prefixed 128-digit
/// binary literal (gated by [`Params::allow_binary`]), or 32 bare hex
/// digits (gated by [`Params::allow_single_segment`]).
fn parse_single_segment(input: &str, params: &Params) -> Option<u128> {
    let bytes = input.as_bytes();
    if params.allow_ipv6_base85
        && bytes.len() == 20
        && bytes.iter().all(|b| BASE85_ALPHABET.contains(b))
    {
        return decode_base85(input);
    }
    if params.allow_binary && bytes.len() == 130 && matches!(bytes[1], b'b' | b'B') && bytes[0] == b'0' {
        let digits = &input[2..];
        return digits
            .bytes()
            .all(|b| matches!(b, b'0' | b'1'))
            .then(|| u128::from_str_radix(digits, 2).ok())
            .flatten();
    }
    if params.allow_single_segment && bytes.len() == 32 && bytes.iter().all(u8::is_ascii_hexdigit) {
        return u128::from_str_radix(input, 16).ok();
    }
    None
}

fn segments_into_u128(segments: [u16; 8]) -> u128 {
    // Safety: it is always safe to transmute `[u16; 8]` to `[u8; 16]`.
    #[allow(unsafe_code)]
    let octets = unsafe {
        core::mem::transmute::<[u16; 8], [u8; 16]>([
            segments[0].to_be(),
            segments[1].to_be(),
            segments[2].to_be(),
            segments[3].to_be(),
            segments[4].to_be(),
            segments[5].to_be(),
            segments[6].to_be(),
            segments[7].to_be(),
        ])
    };
    u128::from_be_bytes(octets)
}

/// Classify why an IPv6 literal failed to parse, for error reporting only:
/// this runs once, after the single real parse attempt above has already
/// rejected `input`, purely to pick a more specific [`ParserError`] variant
/// and the offending substring. It never changes what is accepted.
fn classify_ipv6(input: &str) -> (ParserError, &str) {
    if input.is_empty() {
        return (ParserError::EmptyNotAllowed, input);
    }
    if input.matches("::").count() > 1 {
        return (ParserError::TooManySegments, input);
    }
    let groups = input.split(':').filter(|s| !s.is_empty()).count();
    if groups > 8 {
        return (ParserError::TooManySegments, input);
    }
    if !input.contains("::") && groups < 8 && !input.contains('.') {
        return (ParserError::TooFewSegments, input);
    }
    for group in input.split(':').filter(|s| !s.is_empty()) {
        if group.contains('.') {
            continue;
        }
        if group.len() > 4 {
            return (ParserError::SegmentTooLong, group);
        }
        if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return (ParserError::InvalidCharacter, group);
        }
    }
    (ParserError::InvalidCharacter, input)
}

#[inline(always)]
pub fn parse_addr(input: &str) -> Result<u128, Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv6_segments)
        .ok_or_else(|| {
            let (reason, offending) = classify_ipv6(input);
            err!(Kind::AddressString(reason), offending: offending)
        })
        .map(segments_into_u128)
}

#[inline(always)]
pub fn parse_prefix(input: &str) -> Result<(u128, u8), Error> {
    Parser::new(input)
        .take_with_length(Parser::take_ipv6_segments)
        .ok_or_else(|| {
            let body = input.split('/').next().unwrap_or(input);
            let (reason, offending) = classify_ipv6(body);
            err!(Kind::AddressString(reason), offending: offending)
        })
        .map(|(segments, len)| (segments_into_u128(segments), len))
}

/// Parse a colon-separated IPv6 expression in which any hextet may be a
/// SQL-style `*` wildcard or an `a-b` range (e.g. `"2001:db8:*:*:*:*:*:*"`),
/// returning the `(lower, upper)` bounds of the resulting address range.
///
/// This notation requires all 8 hextets spelled out; it does not combine
/// with `::` zero-run compression.
#[inline(always)]
pub fn parse_range(input: &str) -> Result<(u128, u128), Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv6_hextet_ranges)
        .ok_or_else(|| err!(Kind::AddressString(ParserError::InvalidJoinedRanges), offending: input))
        .map(|(lower, upper)| (segments_into_u128(lower), segments_into_u128(upper)))
}

/// Parse a colon-separated IPv6 subnet expression in which any hextet may
/// carry a `*` wildcard or an `a-b` range, returning the per-hextet
/// `(lower, upper)` bound arrays rather than collapsing them to a single
/// numeric range. This is the division-wise view consumed by
/// [`crate::concrete::Ipv6Subnet`], as distinct from [`parse_range`]'s
/// sequential-closure view. As with [`parse_range`], all 8 hextets must be
/// spelled out.
#[inline(always)]
pub fn parse_segments(input: &str) -> Result<([u16; 8], [u16; 8]), Error> {
    Parser::new(input)
        .take_only(Parser::take_ipv6_hextet_ranges)
        .ok_or_else(|| err!(Kind::AddressString(ParserError::InvalidJoinedRanges), offending: input))
}

/// Parse an IPv6 address honoring the optional forms enabled by `params`.
/// With [`Params::strict`] this behaves exactly like [`parse_addr`].
#[inline]
pub fn parse_addr_with(input: &str, params: &Params) -> Result<u128, Error> {
    if input.is_empty() {
        return if params.allow_empty {
            Ok(0)
        } else {
            let (reason, offending) = classify_ipv6(input);
            Err(err!(Kind::AddressString(reason), offending: offending))
        };
    }
    let permissive = params.allow_ipv6_base85 || params.allow_binary || params.allow_single_segment;
    if permissive {
        if let Some(addr) = parse_single_segment(input, params) {
            return Ok(addr);
        }
    }
    parse_addr(input)
}

/// [`parse_segments`], additionally accepting a standalone whole-address
/// wildcard (gated by [`Params::allow_all_wildcard`]) ahead of the per-hextet
/// grammar.
#[inline]
pub fn parse_segments_with(input: &str, params: &Params) -> Result<([u16; 8], [u16; 8]), Error> {
    if params.allow_all_wildcard && input.as_bytes() == [params.wildcard_char] {
        return Ok(([0; 8], [0xffff; 8]));
    }
    parse_segments(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let input = "2001:db8:0:0:0:0:0:1";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
    }

    #[test]
    fn simple_elided() {
        let input = "2001:db8::";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x2001_0db8_0000_0000_0000_0000_0000_0000);
    }

    #[test]
    fn complex_elided() {
        let input = "2001:db8::dead:beef";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x2001_0db8_0000_0000_0000_0000_dead_beef);
    }

    #[test]
    fn ipv4_mapped() {
        let input = "::ffff:192.0.2.1";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x0000_0000_0000_0000_0000_ffff_c000_0201);
    }

    #[test]
    fn trailing_elided() {
        let input = "::1";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x0000_0000_0000_0000_0000_0000_0000_0001);
    }

    #[test]
    fn explicit_ipv4_mapped() {
        let input = "0:0:0:0:0:ffff:192.0.2.1";
        let addr = parse_addr(input).unwrap();
        assert_eq!(addr, 0x0000_0000_0000_0000_0000_ffff_c000_0201);
    }

    #[test]
    fn disallow_excess_digits() {
        let input = "1:0ffff::";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn disallow_excess_parts() {
        let input = "1:2::4:5:6:7:8:9";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn disallow_mapped_ipv4_overflow() {
        let input = "::1:2:3:4:5:6:7.8.9.0";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn disallow_empty() {
        let input = "";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn disallow_missing_colons() {
        let input = "0";
        let addr = parse_addr(input);
        assert!(addr.is_err());
    }

    #[test]
    fn strict_params_matches_parse_addr_exactly() {
        let input = "2001:db8::1";
        assert_eq!(
            parse_addr_with(input, &Params::strict()).unwrap(),
            parse_addr(input).unwrap()
        );
    }

    fn encode_base85(mut value: u128) -> [u8; 20] {
        let mut buf = [b'0'; 20];
        for slot in buf.iter_mut().rev() {
            *slot = BASE85_ALPHABET[(value % 85) as usize];
            value /= 85;
        }
        buf
    }

    #[test]
    fn permissive_params_accepts_base85() {
        let buf = encode_base85(1000);
        let encoded = core::str::from_utf8(&buf).unwrap();
        let addr = parse_addr_with(encoded, &Params::permissive()).unwrap();
        assert_eq!(addr, 1000);
    }

    #[test]
    fn base85_rejected_without_flag() {
        let buf = encode_base85(1000);
        let encoded = core::str::from_utf8(&buf).unwrap();
        assert!(parse_addr_with(encoded, &Params::strict()).is_err());
    }

    #[test]
    fn permissive_params_accepts_binary_literal() {
        let mut buf = [b'0'; 130];
        buf[1] = b'b';
        buf[129] = b'1';
        let input = core::str::from_utf8(&buf).unwrap();
        let addr = parse_addr_with(input, &Params::permissive()).unwrap();
        assert_eq!(addr, 1);
    }

    #[test]
    fn permissive_params_accepts_single_segment() {
        let input = "20010db8000000000000000000000001";
        let addr = parse_addr_with(input, &Params::permissive()).unwrap();
        assert_eq!(addr, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
    }

    #[test]
    fn whole_address_wildcard_requires_flag() {
        assert!(parse_segments_with("*", &Params::strict()).is_err());
        let (lo, hi) = parse_segments_with("*", &Params::permissive()).unwrap();
        assert_eq!(lo, [0; 8]);
        assert_eq!(hi, [0xffff; 8]);
    }

    #[test]
    fn parse_wildcard_hextets() {
        let (lo, hi) = parse_range("2001:db8:0:0:0:0:0:*").unwrap();
        assert_eq!(lo, 0x2001_0db8_0000_0000_0000_0000_0000_0000);
        assert_eq!(hi, 0x2001_0db8_0000_0000_0000_0000_0000_ffff);
    }

    #[test]
    fn parse_hextet_range() {
        let (lo, hi) = parse_range("2001:db8:0:0:0:0:0:1-2").unwrap();
        assert_eq!(lo, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert_eq!(hi, 0x2001_0db8_0000_0000_0000_0000_0000_0002);
    }

    #[test]
    fn reject_unelided_range_with_too_few_hextets() {
        assert!(parse_range("2001:db8::1").is_err());
    }

    #[test]
    fn simple_prefix() {
        let input = "2001:db8::/32";
        let addr = parse_prefix(input).unwrap();
        assert_eq!(addr, (0x2001_0db8_0000_0000_0000_0000_0000_0000, 32));
    }

    #[test]
    fn ipv4_mapped_prefix() {
        let input = "::ffff:192.0.0.0/112";
        let addr = parse_prefix(input).unwrap();
        assert_eq!(addr, (0x0000_0000_0000_0000_0000_ffff_c000_0000, 112));
    }

    #[cfg(feature = "std")]
    mod proptests {
        use std::net::Ipv6Addr;
        use std::string::ToString;

        use proptest::{arbitrary::any, proptest};

        use crate::concrete::Address;

        use super::*;

        proptest! {
            #[test]
            fn parse_any_ipv6_addr(addr in any::<Ipv6Addr>()) {
                let addr_num: u128 = addr.into();
                let addr_parsed = parse_addr(&addr.to_string()).unwrap();
                assert_eq!(addr_num, addr_parsed);
            }
        }

        proptest! {
            #[test]
            fn parse_any_utf8(s in r"\PC*") {
                let stdlib: Option<Ipv6Addr> = s.parse().ok();
                assert_eq!(parse_addr(&s).map(Address::new).ok(), stdlib.map(Address::from));
            }
        }

        #[cfg(feature = "ipnet")]
        use ipnet::Ipv6Net;

        #[cfg(feature = "ipnet")]
        proptest! {
            #[test]
            fn parse_any_ipv6_prefix(addr in any::<Ipv6Addr>(), len in 0..=128u8) {
                let prefix = Ipv6Net::new(addr, len).unwrap();
                let prefix_nums = (prefix.addr().into(), prefix.prefix_len());
                let prefix_parsed = parse_prefix(&prefix.to_string()).unwrap();
                assert_eq!(prefix_nums, prefix_parsed);
            }
        }
    }
}
