//! Segment-level subnet objects: [`Ipv4Subnet`] and [`Ipv6Subnet`].
//!
//! These are the Cartesian-product "subnet" described by a joined textual
//! form like `"1-2.3.4.5"` or `"1.2.*.*"` — see [`super::section`] for the
//! underlying algebra. They are deliberately a distinct type from
//! [`super::AddressRange`]: the same textual form's sequential closure
//! (every address numerically between the bounds) is a superset of the
//! subnet object whenever a non-trailing division is a non-trivial range.
use core::fmt;
use core::str::FromStr;

use super::{
    section::{Ipv4Section, Ipv6Section, Segment},
    Address, AddressRange, Ipv4, Ipv6,
};
use crate::{
    error::Error,
    params::Params,
    parser,
    traits::{primitive::Address as _, Afi},
};

/// A dotted-quad IPv4 subnet: the Cartesian product of four octet
/// segments, e.g. the two addresses described by `"1-2.3.4.5"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Subnet {
    section: Ipv4Section,
}

impl Ipv4Subnet {
    /// Build a subnet directly from its underlying section.
    #[must_use]
    pub const fn from_section(section: Ipv4Section) -> Self {
        Self { section }
    }

    /// The underlying division/segment section.
    #[must_use]
    pub const fn section(&self) -> &Ipv4Section {
        &self.section
    }

    /// Returns [`true`] if `addr` falls within every one of this subnet's
    /// segments, octet by octet.
    ///
    /// This is narrower than [`AddressRange::contains`]: for
    /// `"1-2.3.4.5"`, `1.200.4.5` fails this test (octet 1 must be exactly
    /// `3`) even though it lies between `1.3.4.5` and `2.3.4.5` as plain
    /// integers.
    #[must_use]
    pub fn contains(&self, addr: &Address<Ipv4>) -> bool {
        self.section.contains_value(&addr.octets())
    }

    /// Returns [`true`] if `other`'s segments are each contained within
    /// the corresponding segment of `self`.
    #[must_use]
    pub fn contains_subnet(&self, other: &Self) -> bool {
        self.section.contains(&other.section)
    }

    /// The sequential-range closure spanning this subnet's lowest and
    /// highest address, per [`AddressRange`].
    #[must_use]
    pub fn spanning_range(&self) -> AddressRange<Ipv4> {
        let segments = self.section.segments();
        let lower = segments.map(|s| s.lower());
        let upper = segments.map(|s| s.upper());
        AddressRange::new(
            Address::new(<Ipv4 as Afi>::Primitive::from_be_bytes(lower)),
            Address::new(<Ipv4 as Afi>::Primitive::from_be_bytes(upper)),
        )
    }

    /// Parse a subnet honoring the optional forms enabled by `params`: a
    /// standalone whole-address wildcard (`*`) is recognized iff
    /// [`Params::allow_all_wildcard`] is set, ahead of the per-octet
    /// wildcard/range grammar, which is always on. With [`Params::strict`]
    /// this is equivalent to [`str::parse`].
    ///
    /// # Errors
    ///
    /// Fails if `s` does not conform to the subnet grammar.
    pub fn parse_with(s: &str, params: &Params) -> Result<Self, Error> {
        let (lower, upper) = parser::ipv4::parse_segments_with(s, params)?;
        let mut segments = [Segment::exact(0u8); 4];
        for i in 0..4 {
            segments[i] = Segment::new(lower[i], upper[i]);
        }
        Ok(Self::from_section(Ipv4Section::from_segments(segments)))
    }
}

impl FromStr for Ipv4Subnet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = parser::ipv4::parse_segments(s)?;
        let mut segments = [Segment::exact(0u8); 4];
        for i in 0..4 {
            segments[i] = Segment::new(lower[i], upper[i]);
        }
        Ok(Self::from_section(Ipv4Section::from_segments(segments)))
    }
}

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.section.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A colon-separated IPv6 subnet: the Cartesian product of eight hextet
/// segments, e.g. `"2001:db8:*:*:*:*:*:*"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv6Subnet {
    section: Ipv6Section,
}

impl Ipv6Subnet {
    /// Build a subnet directly from its underlying section.
    #[must_use]
    pub const fn from_section(section: Ipv6Section) -> Self {
        Self { section }
    }

    /// The underlying division/segment section.
    #[must_use]
    pub const fn section(&self) -> &Ipv6Section {
        &self.section
    }

    /// Returns [`true`] if `addr` falls within every one of this subnet's
    /// segments, hextet by hextet. See [`Ipv4Subnet::contains`] for the
    /// same caveat relative to the sequential-range closure.
    #[must_use]
    pub fn contains(&self, addr: &Address<Ipv6>) -> bool {
        self.section.contains_value(&addr.segments())
    }

    /// Returns [`true`] if `other`'s segments are each contained within
    /// the corresponding segment of `self`.
    #[must_use]
    pub fn contains_subnet(&self, other: &Self) -> bool {
        self.section.contains(&other.section)
    }

    /// The sequential-range closure spanning this subnet's lowest and
    /// highest address, per [`AddressRange`].
    #[must_use]
    pub fn spanning_range(&self) -> AddressRange<Ipv6> {
        use crate::traits::primitive::IntoIpv6Segments;

        let segments = self.section.segments();
        let lower = segments.map(|s| s.lower());
        let upper = segments.map(|s| s.upper());
        AddressRange::new(
            Address::new(<<Ipv6 as Afi>::Primitive as IntoIpv6Segments>::from_segments(lower)),
            Address::new(<<Ipv6 as Afi>::Primitive as IntoIpv6Segments>::from_segments(upper)),
        )
    }

    /// Parse a subnet honoring the optional forms enabled by `params`: a
    /// standalone whole-address wildcard (`*`) is recognized iff
    /// [`Params::allow_all_wildcard`] is set, ahead of the per-hextet
    /// wildcard/range grammar, which is always on. With [`Params::strict`]
    /// this is equivalent to [`str::parse`].
    ///
    /// # Errors
    ///
    /// Fails if `s` does not conform to the subnet grammar.
    pub fn parse_with(s: &str, params: &Params) -> Result<Self, Error> {
        let (lower, upper) = parser::ipv6::parse_segments_with(s, params)?;
        let mut segments = [Segment::exact(0u16); 8];
        for i in 0..8 {
            segments[i] = Segment::new(lower[i], upper[i]);
        }
        Ok(Self::from_section(Ipv6Section::from_segments(segments)))
    }
}

impl FromStr for Ipv6Subnet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = parser::ipv6::parse_segments(s)?;
        let mut segments = [Segment::exact(0u16); 8];
        for i in 0..8 {
            segments[i] = Segment::new(lower[i], upper[i]);
        }
        Ok(Self::from_section(Ipv6Section::from_segments(segments)))
    }
}

impl fmt::Display for Ipv6Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.section.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{segment:x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_octet_range_subnet_excludes_scenario_outlier() {
        let subnet: Ipv4Subnet = "1-2.3.4.5".parse().unwrap();
        assert!(subnet.contains(&"1.3.4.5".parse().unwrap()));
        assert!(subnet.contains(&"2.3.4.5".parse().unwrap()));
        assert!(!subnet.contains(&"1.200.4.5".parse().unwrap()));
    }

    #[test]
    fn subnet_spanning_range_matches_closure_bounds() {
        let subnet: Ipv4Subnet = "1-2.3.4.5".parse().unwrap();
        let range = subnet.spanning_range();
        assert_eq!(range.lower().to_string(), "1.3.4.5");
        assert_eq!(range.upper().to_string(), "2.3.4.5");
        // but the closure, unlike the subnet, contains the outlier.
        assert!(range.contains(&"1.200.4.5".parse().unwrap()));
    }

    #[test]
    fn wildcard_subnet_parses() {
        let subnet: Ipv4Subnet = "1.2.*.*".parse().unwrap();
        assert_eq!(subnet.to_string(), "1.2.*.*");
        assert!(subnet.contains(&"1.2.255.0".parse().unwrap()));
        assert!(!subnet.contains(&"1.3.0.0".parse().unwrap()));
    }

    #[test]
    fn ipv6_wildcard_subnet_parses() {
        let subnet: Ipv6Subnet = "2001:db8:*:*:*:*:*:*".parse().unwrap();
        assert!(subnet.contains(&"2001:db8::1".parse().unwrap()));
        assert!(!subnet.contains(&"2001:db9::1".parse().unwrap()));
    }

    #[test]
    fn whole_address_wildcard_requires_flag() {
        assert!(Ipv4Subnet::parse_with("*", &Params::strict()).is_err());
        let subnet = Ipv4Subnet::parse_with("*", &Params::permissive()).unwrap();
        assert!(subnet.contains(&"255.255.255.255".parse().unwrap()));
        assert!(subnet.contains(&"0.0.0.0".parse().unwrap()));
    }

    #[test]
    fn ipv6_whole_address_wildcard_requires_flag() {
        assert!(Ipv6Subnet::parse_with("*", &Params::strict()).is_err());
        let subnet = Ipv6Subnet::parse_with("*", &Params::permissive()).unwrap();
        assert!(subnet.contains(&"2001:db8::1".parse().unwrap()));
    }
}
