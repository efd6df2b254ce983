//! Types and traits for working with IP addresses, MAC addresses, prefixes
//! and host names generically over address families.
#![doc(html_root_url = "https://docs.rs/generic-ip/0.1.0-alpha.3")]
#![cfg_attr(not(feature = "std"), no_std)]
// #![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Polymorphic `{ IPv4, IPv6 }` types, dispatching over the runtime address
/// family of a value.
pub mod any;
/// Concrete, address-family-parameterized types: [`Ipv4`], [`Ipv6`] and
/// their [`concrete::Address`], [`concrete::Prefix`] and [`concrete::Mask`]
/// families.
pub mod concrete;
/// Address-family independent traits implemented by both [`any`] and
/// [`concrete`] types.
pub mod traits;

/// IP address formatting traits.
pub mod fmt;

/// MAC address types.
pub mod mac;

/// Host name parsing, validation and resolution.
#[cfg(feature = "std")]
pub mod host;

mod parser;

mod inline_str;

mod error;
pub use self::error::{Error, Kind, ParserError};

/// The parser parameters record: opt-in flags for textual address forms
/// beyond the strict default grammar.
pub mod params;
pub use self::params::Params;

pub use self::any::Any;
pub use self::concrete::{Ipv4, Ipv6};
pub use self::traits::{Afi, AfiClass};

/// Either a concrete or polymorphic IP address, depending on `A`.
pub type Address<A> = <A as AfiClass>::Address;
/// Either a concrete or polymorphic IP interface, depending on `A`.
pub type Interface<A> = <A as AfiClass>::Interface;
/// Either a concrete or polymorphic IP prefix, depending on `A`.
pub type Prefix<A> = <A as AfiClass>::Prefix;
/// Either a concrete or polymorphic IP prefix length, depending on `A`.
pub type PrefixLength<A> = <A as AfiClass>::PrefixLength;
/// Either a concrete or polymorphic IP netmask, depending on `A`.
pub type Netmask<A> = <A as AfiClass>::Netmask;
/// Either a concrete or polymorphic IP hostmask, depending on `A`.
pub type Hostmask<A> = <A as AfiClass>::Hostmask;
/// Either a concrete or polymorphic IP bitmask, depending on `A`.
pub type Bitmask<A> = <A as AfiClass>::Bitmask;
/// Either a concrete or polymorphic contiguous range of IP prefix lengths,
/// depending on `A`.
pub type PrefixRange<A> = <A as AfiClass>::PrefixRange;
/// Either a concrete or polymorphic set of IP prefixes, depending on `A`.
#[cfg(feature = "std")]
pub type PrefixSet<A> = <A as AfiClass>::PrefixSet;
