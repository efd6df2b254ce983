use crate::{
    any,
    concrete::{Ipv4, Ipv6},
    error::{err, Error, Kind, ParserError},
    params::Params,
    parser,
    traits::{primitive::IntoIpv6Segments as _, Address as _, Afi},
};

use super::{zone::Zone, Address};

// TODO: make methods `const fn`
impl Address<Ipv6> {
    /// Parse an address honoring the optional textual forms enabled by
    /// `params` (RFC 1924 base-85, `0b` binary, a bare 32-hex-digit single
    /// segment, or the empty string): see [`Params`]. The `%zone` suffix is
    /// recognized iff [`Params::allow_ipv6_zone`] is set. With
    /// [`Params::strict`] this is equivalent to [`str::parse`].
    ///
    /// # Errors
    ///
    /// Fails if `s` does not conform to any form `params` enables.
    pub fn parse_with(s: &str, params: &Params) -> Result<Self, Error> {
        let (addr, zone) = if let Some((addr, zone)) = s.split_once('%') {
            if !params.allow_ipv6_zone {
                return Err(err!(Kind::AddressString(ParserError::ZoneNotAllowed)));
            }
            if zone.is_empty() {
                return Err(err!(Kind::AddressString(ParserError::ZoneNotAllowed)));
            }
            (addr, Some(Zone::try_from(zone)?))
        } else {
            (s, None)
        };
        let value = parser::ipv6::parse_addr_with(addr, params)?;
        Ok(Self::new(value).with_zone_raw(zone))
    }

    pub fn is_unicast_link_local(&self) -> bool {
        self.is_link_local()
    }

    /// The zone identifier (RFC 4007) carried by this address, if it was
    /// parsed or constructed with one.
    #[must_use]
    pub fn zone(&self) -> Option<&Zone> {
        self.zone_raw_ref().as_ref()
    }

    /// Returns a copy of this address carrying `zone`.
    #[must_use]
    pub fn with_zone(self, zone: Zone) -> Self {
        self.with_zone_raw(Some(zone))
    }

    /// Returns a copy of this address with its zone identifier, if any,
    /// removed.
    #[must_use]
    pub fn without_zone(self) -> Self {
        self.with_zone_raw(None)
    }

    pub fn multicast_scope(&self) -> Option<Ipv6MulticastScope> {
        if self.is_multicast() {
            match self.octets()[1] & 0x0f {
                0x0 => Some(Ipv6MulticastScope::Reserved),
                0x1 => Some(Ipv6MulticastScope::InterfaceLocal),
                0x2 => Some(Ipv6MulticastScope::LinkLocal),
                0x3 => Some(Ipv6MulticastScope::RealmLocal),
                0x4 => Some(Ipv6MulticastScope::AdminLocal),
                0x5 => Some(Ipv6MulticastScope::SiteLocal),
                0x6..=0x07 => Some(Ipv6MulticastScope::Unassigned),
                0x8 => Some(Ipv6MulticastScope::OrganizationLocal),
                0x9..=0x0d => Some(Ipv6MulticastScope::Unassigned),
                0xe => Some(Ipv6MulticastScope::Global),
                0xf => Some(Ipv6MulticastScope::Reserved),
                _ => unreachable!(),
            }
        } else {
            None
        }
    }

    pub fn segments(&self) -> [u16; 8] {
        self.into_primitive().into_segments()
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_canonical(&self) -> any::Address {
        if let Some(ipv4_addr) = self.to_ipv4_mapped() {
            any::Address::Ipv4(ipv4_addr)
        } else {
            any::Address::Ipv6(*self)
        }
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_ipv4(&self) -> Option<Address<Ipv4>> {
        self.to_ipv4_mapped().or_else(|| match self.octets() {
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, octets @ ..] => Some(Address::new(
                <Ipv4 as Afi>::Primitive::from_be_bytes(octets),
            )),
            _ => None,
        })
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_ipv4_mapped(&self) -> Option<Address<Ipv4>> {
        match self.octets() {
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets @ ..] => Some(Address::new(
                <Ipv4 as Afi>::Primitive::from_be_bytes(octets),
            )),
            _ => None,
        }
    }

    /// Returns [`true`] if this is an IPv4-mapped address (`::ffff:a.b.c.d`).
    pub fn is_ipv4_mapped(&self) -> bool {
        self.to_ipv4_mapped().is_some()
    }

    /// Format the address as eight colon-separated hextets, with no `::`
    /// zero-run compression (RFC 5952 calls this the "normalized" form
    /// absent the compression step).
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_normalized_string(&self) -> std::string::String {
        let segments = self.segments();
        let mut out = std::string::String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push(':');
            }
            out.push_str(&std::format!("{segment:x}"));
        }
        out
    }

    /// Format the address using the shortest valid representation (RFC
    /// 5952): this is the same textual form as [`Display`][core::fmt::Display].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_compressed_string(&self) -> std::string::String {
        std::string::ToString::to_string(self)
    }

    /// Format the address in mixed notation, spelling the trailing 32 bits
    /// as a dotted-quad when they are the address's final two hextets, e.g.
    /// `::ffff:192.0.2.1`.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_mixed_string(&self) -> std::string::String {
        let segments = self.segments();
        let [a, b] = segments[6].to_be_bytes();
        let [c, d] = segments[7].to_be_bytes();
        let mut head = std::string::String::new();
        for (i, segment) in segments[..6].iter().enumerate() {
            if i > 0 {
                head.push(':');
            }
            head.push_str(&std::format!("{segment:x}"));
        }
        std::format!("{head}:{a}.{b}.{c}.{d}")
    }

    /// Format the address as a Microsoft UNC IPv6 literal host name, e.g.
    /// `2001-db8--1.ipv6-literal.net` (colons become `-`, and a zone's `%`
    /// becomes `s`).
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_unc_string(&self) -> std::string::String {
        let mut body = std::string::ToString::to_string(&self.without_zone()).replace(':', "-");
        if let Some(zone) = self.zone() {
            body = std::format!("{body}s{zone}");
        }
        std::format!("{body}.ipv6-literal.net")
    }

    /// Format the reverse-DNS (`ip6.arpa`) name for this address: each
    /// nibble of the address, reversed.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_reverse_dns(&self) -> std::string::String {
        let octets = self.octets();
        let mut out = std::string::String::with_capacity(72);
        for byte in octets.iter().rev() {
            out.push_str(&std::format!("{:x}.{:x}.", byte & 0x0f, byte >> 4));
        }
        out.push_str("ip6.arpa");
        out
    }
}


// TODO: document omission of `non_exhaustive`
pub enum Ipv6MulticastScope {
    Reserved,
    Unassigned,
    InterfaceLocal,
    LinkLocal,
    RealmLocal,
    AdminLocal,
    SiteLocal,
    OrganizationLocal,
    Global,
}
