use core::borrow::Borrow;
use core::cmp::Ord;
use core::fmt::Debug;
use core::hash::Hash;

use crate::{
    any, concrete,
    concrete::ZoneValue,
    error::{err, Error, Kind, ParserError},
    fmt,
};

use super::{Address, Bitmask, Hostmask, Interface, Netmask, Prefix, PrefixLength, PrefixRange};
#[cfg(feature = "std")]
use super::PrefixSet;

use super::primitive;

/// An interface for describing an IP address family.
pub trait Afi: Copy + Debug + Hash + Ord {
    // This bound is required to satisfy coherence rules when implementing
    // `From<A::Octets> for Address<A>`
    /// The big-endian byte array representation of addresses of this address
    /// family.
    type Octets: Borrow<[u8]>;

    /// The primitive integer type used to store address values of this address
    /// family.
    type Primitive: primitive::Address<Self> + fmt::AddressDisplay<Self>;

    /// The zone-identifier representation carried alongside addresses of
    /// this address family: `()` where there is no concept of a zone,
    /// `Option<concrete::addr::Zone>` for IPv6.
    type Zone: ZoneValue;

    /// Get the [`concrete::Afi`] variant associated with `Self`.
    fn as_afi() -> concrete::Afi;

    /// Parse a textual address into its primitive value and zone.
    ///
    /// The default implementation rejects any `%zone` suffix outright;
    /// address families that carry a zone override this to split it off
    /// before delegating to [`primitive::Address::parse_addr`].
    ///
    /// # Errors
    ///
    /// Fails if the string does not conform to the textual address
    /// representation rules for `Self`, or carries a zone where none is
    /// accepted.
    fn parse_address(s: &str) -> Result<(Self::Primitive, Self::Zone), Error> {
        if s.contains('%') {
            return Err(err!(Kind::AddressString(ParserError::ZoneNotAllowed)));
        }
        <Self::Primitive as primitive::Address<Self>>::parse_addr(s)
            .map(|value| (value, Self::Zone::NONE))
    }
}

/// Provides an interface for describing a class of IP address families.
pub trait AfiClass: Copy + Debug + Hash + Ord {
    /// The type respresenting IP address values of this address family class.
    type Address: Address;

    /// The type respresenting IP interface values of this address family class.
    type Interface: Interface;

    /// The type respresenting IP prefix values of this address family class.
    type Prefix: Prefix;

    /// The type respresenting IP prefix-length values of this address family class.
    type PrefixLength: PrefixLength;

    /// The type respresenting IP netmask values of this address family class.
    type Netmask: Netmask;

    /// The type respresenting IP hostmask values of this address family class.
    type Hostmask: Hostmask;

    /// The type respresenting IP bitmask values of this address family class.
    type Bitmask: Bitmask;

    /// The type respresenting a contiguous range of IP prefix lengths
    /// rooted at a single prefix, for this address family class.
    type PrefixRange: PrefixRange;

    /// The type respresenting a set of IP prefixes of this address family
    /// class.
    #[cfg(feature = "std")]
    type PrefixSet: PrefixSet;

    /// Get the [`any::AfiClass`] variant associated with `Self`.
    fn as_afi_class() -> any::AfiClass;
}
