use std::string::String;

use crate::{any, concrete::Zone};

/// The optional trailing metadata a host name string may carry alongside its
/// address-or-name body: a port or service, a prefix length or mask, and —
/// for an IPv6 literal — a zone.
///
/// Port and service are mutually exclusive by construction: the parser only
/// ever populates one of them from a single trailing `:suffix`. Prefix
/// length and mask may both be set only when one was derived from the
/// other (e.g. a mask that happens to be expressible as a prefix length was
/// also recorded as one), which is what [`Qualifier::set_mask`] does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Qualifier {
    pub(super) port: Option<u16>,
    pub(super) service: Option<String>,
    pub(super) prefix_length: Option<u8>,
    pub(super) mask: Option<any::Address>,
    pub(super) zone: Option<Zone>,
}

impl Qualifier {
    /// The port number carried by this qualifier, if any.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The service name carried by this qualifier, if any.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// The prefix length carried by this qualifier, if any.
    #[must_use]
    pub fn prefix_length(&self) -> Option<u8> {
        self.prefix_length
    }

    /// The mask address carried by this qualifier, if any.
    #[must_use]
    pub fn mask(&self) -> Option<&any::Address> {
        self.mask.as_ref()
    }

    /// The IPv6 zone carried by this qualifier, if any.
    ///
    /// This is not parsed independently: it is read off the address's own
    /// zone field (see [`concrete::Address<Ipv6>::zone`][crate::concrete::Address])
    /// once the body has been parsed as a literal address.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_ref().map(Zone::as_str)
    }

    /// Returns [`true`] if neither a port, service, prefix length, mask nor
    /// zone were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.port.is_none()
            && self.service.is_none()
            && self.prefix_length.is_none()
            && self.mask.is_none()
            && self.zone.is_none()
    }

    /// Copy the zone off a parsed literal address into this qualifier.
    pub(super) fn set_zone(&mut self, zone: Option<Zone>) {
        self.zone = zone;
    }

    /// Merge `mask` into this qualifier, also recording the equivalent
    /// prefix length when `mask` happens to be contiguous from the
    /// most-significant bit (a conventional netmask).
    pub(super) fn set_mask(&mut self, mask: any::Address) {
        if let Some(len) = contiguous_prefix_length(&mask) {
            self.prefix_length = Some(len);
        }
        self.mask = Some(mask);
    }
}

/// Returns the prefix length equivalent to `mask`, if `mask`'s bits are a
/// contiguous run of ones from the most significant bit (i.e. it is a
/// conventional netmask and not an arbitrary bit pattern).
fn contiguous_prefix_length(mask: &any::Address) -> Option<u8> {
    use crate::{
        any::Address as AnyAddress,
        concrete::Ipv4,
        traits::{primitive::Address as _, Afi},
    };

    match mask {
        AnyAddress::Ipv4(addr) => {
            let value = addr.into_primitive();
            let len = value.count_ones();
            let candidate = u32::MAX
                .checked_shl(u32::from(<Ipv4 as Afi>::Primitive::MAX_LENGTH - len as u8))
                .unwrap_or(0);
            (candidate == value).then_some(len as u8)
        }
        AnyAddress::Ipv6(addr) => {
            let value = addr.into_primitive();
            let len = value.count_ones();
            let candidate = u128::MAX.checked_shl(u32::from(128 - len as u8)).unwrap_or(0);
            (candidate == value).then_some(len as u8)
        }
    }
}
