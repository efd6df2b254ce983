//! The IPv6 zone identifier (RFC 4007): the `%eth0` suffix that scopes a
//! link-local or multicast literal to a particular interface.

use core::fmt;
use core::str::FromStr;

use crate::error::{err, Error, Kind, ParserError};
use crate::inline_str::InlineStr;

/// An interface name or index carried alongside an IPv6 address (the part
/// after `%` in `fe80::1%eth0`).
///
/// Zone identifiers are scoping information, not part of the address value
/// itself: RFC 4007 leaves their syntax to the implementation, so this type
/// accepts any non-empty string that is free of `%`, `/` and whitespace (the
/// characters that would otherwise be ambiguous with a prefix length or the
/// surrounding bracketed host-name qualifier syntax).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(InlineStr<32>);

impl Zone {
    /// Returns the zone identifier as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for Zone {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() || s.contains(['%', '/', ' ']) {
            return Err(err!(Kind::AddressString(ParserError::ZoneNotAllowed)));
        }
        Ok(Self(InlineStr::new(s)))
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Debug for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone({:?})", self.as_str())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by the (possibly trivial) zone representation carried inline
/// on an [`Address<A>`][super::Address]: `()` for address families with no
/// concept of a zone, `Option<Zone>` for IPv6.
pub trait ZoneValue: Copy + Default + fmt::Debug + core::hash::Hash + Eq + Ord + 'static {
    /// The "no zone" value, usable in `const` contexts.
    const NONE: Self;

    /// Write the `%zone` suffix (or nothing, for `()`) to `f`.
    fn fmt_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ZoneValue for () {
    const NONE: Self = ();

    fn fmt_suffix(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl ZoneValue for Option<Zone> {
    const NONE: Self = None;

    fn fmt_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(zone) = self {
            write!(f, "%{zone}")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interface_name() {
        let zone: Zone = "eth0".parse().unwrap();
        assert_eq!(zone.as_str(), "eth0");
    }

    #[test]
    fn rejects_empty_zone() {
        assert!(Zone::try_from("").is_err());
    }

    #[test]
    fn rejects_zone_containing_percent() {
        assert!(Zone::try_from("a%b").is_err());
    }
}
