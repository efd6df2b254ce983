use crate::{
    concrete::{Ipv4, Ipv6},
    error::Error,
    params::Params,
    parser,
    traits::{primitive::Address as _, Afi},
};

use super::Address;

// TODO: make methods `const fn`
impl Address<Ipv4> {
    /// The subnet-local broadcast address `255.255.255.255`.
    pub const BROADCAST: Self = Self::new(<Ipv4 as Afi>::Primitive::ONES);

    /// Parse an address honoring the optional textual forms enabled by
    /// `params` (inet-aton joined octets, leading-zero octal, `0b` binary,
    /// a bare single 32-bit segment, or the empty string): see
    /// [`Params`]. With [`Params::strict`] this is equivalent to
    /// [`str::parse`].
    ///
    /// # Errors
    ///
    /// Fails if `s` does not conform to any form `params` enables.
    pub fn parse_with(s: &str, params: &Params) -> Result<Self, Error> {
        parser::ipv4::parse_addr_with(s, params).map(Self::new)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_ipv6_compatible(&self) -> Address<Ipv6> {
        Address::new(<Ipv6 as Afi>::Primitive::from_be_bytes(
            self.to_ipv6_lo_octets(),
        ))
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_ipv6_mapped(&self) -> Address<Ipv6> {
        let mut octets = self.to_ipv6_lo_octets();
        octets[10..12].copy_from_slice(&[0xffu8, 0xffu8]);
        Address::new(<Ipv6 as Afi>::Primitive::from_be_bytes(octets))
    }

    fn to_ipv6_lo_octets(self) -> <Ipv6 as Afi>::Octets {
        let mut octets = <Ipv6 as Afi>::Octets::default();
        octets[12..].copy_from_slice(&self.octets());
        octets
    }

    /// Format the address as four dot-separated 8-bit binary octets, e.g.
    /// `11000000.00000000.00000010.00000001`.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_binary_string(&self) -> std::string::String {
        let [a, b, c, d] = self.octets();
        std::format!("{a:08b}.{b:08b}.{c:08b}.{d:08b}")
    }

    /// Format the address as four dot-separated octal octets, e.g.
    /// `300.0.2.1`.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_octal_string(&self) -> std::string::String {
        let [a, b, c, d] = self.octets();
        std::format!("{a:03o}.{b:03o}.{c:03o}.{d:03o}")
    }

    /// Format the address as four dot-separated hexadecimal octets, e.g.
    /// `c0.00.02.01`, each optionally carrying a `0x` prefix.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_hex_string(&self, prefixed: bool) -> std::string::String {
        let [a, b, c, d] = self.octets();
        if prefixed {
            std::format!("0x{a:02x}.0x{b:02x}.0x{c:02x}.0x{d:02x}")
        } else {
            std::format!("{a:02x}.{b:02x}.{c:02x}.{d:02x}")
        }
    }

    /// Format the reverse-DNS (`in-addr.arpa`) name for this address, e.g.
    /// `1.2.0.192.in-addr.arpa`.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_reverse_dns(&self) -> std::string::String {
        let [a, b, c, d] = self.octets();
        std::format!("{d}.{c}.{b}.{a}.in-addr.arpa")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_strict_matches_from_str() {
        let strict = Params::strict();
        assert_eq!(
            Address::<Ipv4>::parse_with("192.0.2.1", &strict).unwrap(),
            "192.0.2.1".parse::<Address<Ipv4>>().unwrap()
        );
        assert!(Address::<Ipv4>::parse_with("1.01.0.0", &strict).is_err());
    }

    #[test]
    fn parse_with_permissive_accepts_inet_aton_joined() {
        let addr = Address::<Ipv4>::parse_with("192.0x000201", &Params::permissive()).unwrap();
        assert_eq!(addr, "192.0.2.1".parse::<Address<Ipv4>>().unwrap());
    }
}
