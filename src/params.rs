//! The parser parameters record (spec &sect;4.3): a set of flags a caller
//! threads through the address grammar to opt in to forms that are
//! ambiguous, rare, or otherwise not part of this crate's strict default
//! [`core::str::FromStr`] parsing.
//!
//! `Address::<Ipv4>::parse_with` and `Address::<Ipv6>::parse_with` are the
//! entry points that consult a [`Params`] value; the plain `FromStr` impls
//! are equivalent to [`Params::strict`] and never change behavior based on
//! this type.

/// Which optional textual forms a parse call accepts, beyond the always-on
/// dotted-quad / colon-hex grammar.
///
/// `Default` is [`Params::strict`]: every optional form is off, matching
/// the behavior of the plain `FromStr` impls (and, for IPv4, matching
/// `std::net::Ipv4Addr`'s parser closely enough that
/// `fuzz/fuzz_targets/stdlib_constistency_ipv4.rs` holds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Accept an empty string as the all-zeros address.
    pub allow_empty: bool,
    /// Accept a standalone `*` as a wildcard spanning the whole address
    /// space, for the segment/range-returning entry points.
    pub allow_all_wildcard: bool,
    /// Accept a single unseparated segment as the whole address value
    /// (e.g. a bare 32-bit decimal/hex/octal number for IPv4, or 32 hex
    /// digits with no colons for IPv6).
    pub allow_single_segment: bool,
    /// Accept IPv4 "inet-aton joined" forms with 2 or 3 parts (`a.b`,
    /// `a.b.c`), where the trailing part packs the remaining bytes.
    pub allow_ipv4_inet_aton_joined: bool,
    /// Accept a bare leading zero (`010`) as introducing an octal segment,
    /// the classic (ambiguous-looking) `inet_aton` behavior. Segments
    /// explicitly prefixed with `0x`/`0o`/`0b` are unaffected by this flag.
    pub allow_ipv4_leading_zeros: bool,
    /// Accept a trailing `%zone` on an IPv6 literal.
    pub allow_ipv6_zone: bool,
    /// Accept a `/mask-address` qualifier (as opposed to only a
    /// `/prefix-length`).
    pub allow_mask: bool,
    /// Accept a `/prefix-length` qualifier.
    pub allow_prefix: bool,
    /// Accept a `/prefix-length` qualifier whose value exceeds the
    /// address's bit count.
    pub allow_prefix_beyond_size: bool,
    /// Accept a `0b`-prefixed binary segment: a single IPv4 octet's worth
    /// of binary digits, or (combined with
    /// [`allow_single_segment`][Self::allow_single_segment]) the
    /// whole-address 32- or 128-bit binary literal.
    pub allow_binary: bool,
    /// Accept the RFC 1924 base-85 single-segment IPv6 form (exactly 20
    /// extended-alphabet digits, no separators).
    pub allow_ipv6_base85: bool,
    /// The byte recognized as the range separator in joined/segment forms
    /// that this module's `*_with` entry points construct directly (the
    /// always-on per-octet/hextet `a-b` and `*` grammar is unaffected).
    pub range_separator: u8,
    /// The byte recognized as the whole-address wildcard in the entry
    /// points gated by [`allow_all_wildcard`][Self::allow_all_wildcard].
    pub wildcard_char: u8,
}

impl Params {
    /// Every optional form disabled: the behavior of the plain `FromStr`
    /// impls.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_empty: false,
            allow_all_wildcard: false,
            allow_single_segment: false,
            allow_ipv4_inet_aton_joined: false,
            allow_ipv4_leading_zeros: false,
            allow_ipv6_zone: true,
            allow_mask: true,
            allow_prefix: true,
            allow_prefix_beyond_size: false,
            allow_binary: false,
            allow_ipv6_base85: false,
            range_separator: b'-',
            wildcard_char: b'*',
        }
    }

    /// Every optional form enabled.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_empty: true,
            allow_all_wildcard: true,
            allow_single_segment: true,
            allow_ipv4_inet_aton_joined: true,
            allow_ipv4_leading_zeros: true,
            allow_ipv6_zone: true,
            allow_mask: true,
            allow_prefix: true,
            allow_prefix_beyond_size: true,
            allow_binary: true,
            allow_ipv6_base85: true,
            range_separator: b'-',
            wildcard_char: b'*',
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::strict()
    }
}
