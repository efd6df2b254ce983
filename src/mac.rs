//! MAC (hardware) addresses: standard 48-bit and extended 64-bit (EUI-64)
//! forms.
//!
//! Unlike the IP [`concrete`][crate::concrete] types, a MAC address is
//! always a single fixed-width value — there is no netmask, prefix length
//! or address-family parameter to generalize over, so [`Address`] and
//! [`Eui64`] are plain concrete types.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::parser;

/// A 48-bit (EUI-48) MAC address.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address([u8; 6]);

impl Address {
    /// The broadcast address `ff:ff:ff:ff:ff:ff`.
    pub const BROADCAST: Self = Self([0xff; 6]);

    /// Construct an [`Address`] from six octets, in transmission order.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Get the octets of this address, in transmission order.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns [`true`] if this is the broadcast address.
    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Returns [`true`] if the I/G (individual/group) bit is set, marking
    /// this as a multicast destination address.
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Returns [`true`] if the U/L (universal/local) bit is set, marking
    /// this as a locally administered address.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Extend this address to an [`Eui64`] using the IEEE "EUI-64 from
    /// EUI-48" conversion: insert `ff:fe` between the OUI and the
    /// device identifier.
    #[must_use]
    pub fn to_eui64(&self) -> Eui64 {
        let [a, b, c, d, e, f] = self.0;
        Eui64::new([a, b, c, 0xff, 0xfe, d, e, f])
    }
}

impl From<[u8; 6]> for Address {
    fn from(octets: [u8; 6]) -> Self {
        Self::new(octets)
    }
}

impl From<Address> for [u8; 6] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, ff] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{ff:02x}")
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::mac::parse_eui48(s).map(Self::new)
    }
}

/// An extended, 64-bit MAC address, as used by EUI-64 and by IPv6's
/// modified-EUI-64 interface identifiers.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Eui64([u8; 8]);

impl Eui64 {
    /// Construct an [`Eui64`] from eight octets, in transmission order.
    #[must_use]
    pub const fn new(octets: [u8; 8]) -> Self {
        Self(octets)
    }

    /// Get the octets of this address, in transmission order.
    #[must_use]
    pub const fn octets(&self) -> [u8; 8] {
        self.0
    }

    /// Returns [`true`] if the I/G bit is set.
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Returns [`true`] if the U/L bit is set.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Derive the 64-bit IPv6 interface identifier for this address,
    /// flipping the U/L bit as specified by RFC 4291 appendix A.
    #[must_use]
    pub fn to_ipv6_interface_identifier(&self) -> [u8; 8] {
        let mut octets = self.0;
        octets[0] ^= 0x02;
        octets
    }
}

impl From<[u8; 8]> for Eui64 {
    fn from(octets: [u8; 8]) -> Self {
        Self::new(octets)
    }
}

impl From<Eui64> for [u8; 8] {
    fn from(addr: Eui64) -> Self {
        addr.0
    }
}

impl fmt::Debug for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eui64({self})")
    }
}

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, f_, g, h] = self.0;
        write!(
            f,
            "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{f_:02x}:{g:02x}:{h:02x}"
        )
    }
}

impl FromStr for Eui64 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::mac::parse_eui64(s).map(Self::new)
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl Arbitrary for Address {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        proptest::arbitrary::any::<[u8; 6]>()
            .prop_map(Self::new)
            .boxed()
    }
}

#[cfg(any(test, feature = "arbitrary"))]
impl Arbitrary for Eui64 {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        proptest::arbitrary::any::<[u8; 8]>()
            .prop_map(Self::new)
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_colon_form() {
        let mac: Address = "a0:b0:c0:d0:e0:f0".parse().unwrap();
        assert_eq!(mac.to_string(), "a0:b0:c0:d0:e0:f0");
    }

    #[test]
    fn parses_six_hyphen_form() {
        let mac: Address = "a0-b0-c0-d0-e0-f0".parse().unwrap();
        assert_eq!(mac.to_string(), "a0:b0:c0:d0:e0:f0");
    }

    #[test]
    fn parses_three_dotted_form() {
        let mac: Address = "a0b0.c0d0.e0f0".parse().unwrap();
        assert_eq!(mac.to_string(), "a0:b0:c0:d0:e0:f0");
    }

    #[test]
    fn parses_single_segment_form() {
        let mac: Address = "a0b0c0d0e0f0".parse().unwrap();
        assert_eq!(mac.to_string(), "a0:b0:c0:d0:e0:f0");
    }

    #[test]
    fn broadcast_is_broadcast() {
        assert!(Address::BROADCAST.is_broadcast());
        assert!(Address::BROADCAST.is_multicast());
    }

    #[test]
    fn multicast_bit_detection() {
        let mac = Address::new([0x01, 0, 0, 0, 0, 0]);
        assert!(mac.is_multicast());
        assert!(!mac.is_local());
    }

    #[test]
    fn locally_administered_bit_detection() {
        let mac = Address::new([0x02, 0, 0, 0, 0, 0]);
        assert!(!mac.is_multicast());
        assert!(mac.is_local());
    }

    #[test]
    fn eui64_round_trip() {
        let eui: Eui64 = "a0:b0:c0:d0:e0:f0:01:02".parse().unwrap();
        assert_eq!(eui.to_string(), "a0:b0:c0:d0:e0:f0:01:02");
    }

    #[test]
    fn eui48_extends_to_eui64() {
        let mac = Address::new([0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
        let eui = mac.to_eui64();
        assert_eq!(eui.to_string(), "a0:b0:c0:ff:fe:d0:e0:f0");
    }

    #[cfg(feature = "arbitrary")]
    mod proptests {
        use proptest::proptest;

        use super::*;

        proptest! {
            #[test]
            fn display_then_parse_round_trips(mac: Address) {
                let s = mac.to_string();
                let parsed: Address = s.parse().unwrap();
                assert_eq!(mac, parsed);
            }
        }
    }
}
