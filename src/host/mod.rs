//! Parsing, validation and resolution of host names: the free-form "what do
//! I connect to" strings that accept either a literal address or a DNS
//! label sequence, plus the port, service, mask/prefix and zone qualifiers
//! that often ride alongside one in configuration files and URLs.

mod label;
mod qualifier;

use std::string::{String, ToString};
use std::sync::OnceLock;
use std::vec::Vec;

pub use self::qualifier::Qualifier;

use crate::any;
use crate::error::{err, Error, Kind};

/// The parsed body of a [`Name`]: either a literal address, or a sequence
/// of DNS labels awaiting resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Repr {
    Address(any::Address),
    Labels(Vec<String>),
}

/// A host name: a literal IP address or a DNS name, with an optional
/// trailing port, service, prefix length, netmask or (for IPv6 literals)
/// zone.
///
/// ```
/// use ip::host::Name;
/// use ip::traits::Address as _;
///
/// let name: Name = "[::1]:80".parse().unwrap();
/// assert_eq!(name.qualifier().port(), Some(80));
/// assert!(name.to_addresses().unwrap()[0].is_loopback());
/// ```
#[derive(Debug)]
pub struct Name {
    original: String,
    repr: Repr,
    qualifier: Qualifier,
    resolved: OnceLock<Vec<any::Address>>,
}

impl Clone for Name {
    fn clone(&self) -> Self {
        let resolved = OnceLock::new();
        if let Some(addrs) = self.resolved.get() {
            _ = resolved.set(addrs.clone());
        }
        Self {
            original: self.original.clone(),
            repr: self.repr.clone(),
            qualifier: self.qualifier.clone(),
            resolved,
        }
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr && self.qualifier == other.qualifier
    }
}
impl Eq for Name {}

impl Name {
    /// The original string this [`Name`] was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The qualifier (port, service, prefix length, mask, zone) carried by
    /// this name, if any.
    #[must_use]
    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// Returns [`true`] if this name's body is a literal IP address rather
    /// than a DNS label sequence.
    #[must_use]
    pub fn is_literal_address(&self) -> bool {
        matches!(self.repr, Repr::Address(_))
    }

    /// The literal address this name's body was parsed as, if it is one.
    #[must_use]
    pub fn literal_address(&self) -> Option<any::Address> {
        match &self.repr {
            Repr::Address(addr) => Some(*addr),
            Repr::Labels(_) => None,
        }
    }

    /// The DNS labels this name's body was parsed as, if it is a label
    /// sequence rather than a literal address.
    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        match &self.repr {
            Repr::Labels(labels) => Some(labels),
            Repr::Address(_) => None,
        }
    }

    /// Returns [`true`] if this name's label sequence is a reverse-DNS name
    /// (`…in-addr.arpa` or `…ip6.arpa`). Always [`false`] for a literal
    /// address.
    #[must_use]
    pub fn is_reverse_dns(&self) -> bool {
        self.labels().is_some_and(label::is_reverse_dns)
    }

    /// Returns [`true`] if this name's label sequence is a Microsoft UNC
    /// IPv6 literal (`…ipv6-literal.net`). Always [`false`] for a literal
    /// address.
    ///
    /// This only recognizes the textual form; it does not decode the
    /// embedded address back out of the labels.
    #[must_use]
    pub fn is_unc_ipv6_literal(&self) -> bool {
        self.labels().is_some_and(label::is_unc_ipv6_literal)
    }

    /// Resolve this name to the addresses it designates.
    ///
    /// For a literal address, this is the single address itself (masked by
    /// the qualifier's prefix or mask, if any), returned without touching
    /// the network. For a DNS name, this performs a lookup the first time
    /// it is called and caches the result: concurrent callers race to
    /// perform the lookup, and whichever finishes first "wins" the cache,
    /// matching the one-writer-wins contract used elsewhere in this crate.
    /// A failed lookup is never cached, since the same name may resolve
    /// successfully moments later.
    pub fn to_addresses(&self) -> Result<&[any::Address], Error> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(resolved.as_slice());
        }
        let mut addrs = match &self.repr {
            Repr::Address(addr) => std::vec![*addr],
            Repr::Labels(_) => resolve(&self.original, self.qualifier.port().unwrap_or(0))?,
        };
        if let Some(mask) = self.qualifier.mask() {
            for addr in &mut addrs {
                *addr = apply_mask(*addr, mask)?;
            }
        }
        addrs.sort_by_key(any::Address::is_ipv6);
        Ok(self.resolved.get_or_init(|| addrs).as_slice())
    }
}

fn resolve(name: &str, port: u16) -> Result<Vec<any::Address>, Error> {
    use std::net::ToSocketAddrs;

    (name, port)
        .to_socket_addrs()
        .map_err(|_| err!(Kind::HostName, "could not resolve host name"))
        .map(|addrs| addrs.map(|addr| any::Address::from(addr.ip())).collect())
}

fn apply_mask(addr: any::Address, mask: &any::Address) -> Result<any::Address, Error> {
    use crate::concrete::Address as ConcreteAddress;

    match (addr, mask) {
        (any::Address::Ipv4(addr), any::Address::Ipv4(mask)) => Ok(any::Address::Ipv4(
            ConcreteAddress::new(addr.into_primitive() & mask.into_primitive()),
        )),
        (any::Address::Ipv6(addr), any::Address::Ipv6(mask)) => Ok(any::Address::Ipv6(
            ConcreteAddress::new(addr.into_primitive() & mask.into_primitive()),
        )),
        _ => Err(err!(Kind::AfiMismatch, "mask and address family differ")),
    }
}

impl std::str::FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(err!(Kind::HostName, "host name is empty"));
        }
        let (body, mut qualifier) = split_qualifier(s)?;
        let repr = match body.parse::<any::Address>() {
            Ok(addr) => {
                qualifier.set_zone(addr.zone().copied());
                Repr::Address(addr)
            }
            Err(_) => Repr::Labels(label::split_and_validate(body)?),
        };
        Ok(Self {
            original: s.to_string(),
            repr,
            qualifier,
            resolved: OnceLock::new(),
        })
    }
}

/// Split the trailing qualifier (`/prefix-or-mask`, bracketed
/// `[addr%zone]:port`, or bare `:port`/`:service`) off of `s`, returning
/// the remaining address-or-name body and the parsed [`Qualifier`].
fn split_qualifier(s: &str) -> Result<(&str, Qualifier), Error> {
    let mut qualifier = Qualifier::default();

    let s = if let Some((rest, suffix)) = s.rsplit_once('/') {
        if let Ok(len) = suffix.parse::<u8>() {
            qualifier.prefix_length = Some(len);
        } else if let Ok(mask) = suffix.parse::<any::Address>() {
            qualifier.set_mask(mask);
        } else {
            return Err(err!(Kind::HostName, "invalid prefix or mask qualifier"));
        }
        rest
    } else {
        s
    };

    if let Some(rest) = s.strip_prefix('[') {
        let (inside, after) = rest
            .split_once(']')
            .ok_or_else(|| err!(Kind::HostName, "unterminated bracketed address"))?;
        // `inside` is left whole, `%zone` and all: `any::Address::from_str`
        // parses the zone natively, and the qualifier picks it back up from
        // the parsed address in `Name::from_str`.
        if let Some(port_str) = after.strip_prefix(':') {
            set_port_or_service(&mut qualifier, port_str)?;
        } else if !after.is_empty() {
            return Err(err!(Kind::HostName, "unexpected trailing characters"));
        }
        return Ok((inside, qualifier));
    }

    // A bare body with no brackets: try it whole first (handles unadorned
    // IPv4/IPv6 literals, which may themselves contain colons), and only
    // split off a trailing `:port`/`:service` if that fails.
    if s.parse::<any::Address>().is_ok() {
        return Ok((s, qualifier));
    }
    if let Some((rest, suffix)) = s.rsplit_once(':') {
        set_port_or_service(&mut qualifier, suffix)?;
        Ok((rest, qualifier))
    } else {
        Ok((s, qualifier))
    }
}

fn set_port_or_service(qualifier: &mut Qualifier, suffix: &str) -> Result<(), Error> {
    if suffix.is_empty() {
        return Err(err!(Kind::HostName, "empty port or service"));
    }
    if let Ok(port) = suffix.parse::<u16>() {
        qualifier.port = Some(port);
    } else {
        qualifier.service = Some(suffix.to_string());
    }
    Ok(())
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Address as _;

    #[test]
    fn parses_bracketed_ipv6_with_port() {
        let name: Name = "[::1]:80".parse().unwrap();
        assert_eq!(name.qualifier().port(), Some(80));
        assert!(name.literal_address().unwrap().is_loopback());
    }

    #[test]
    fn resolving_literal_returns_itself() {
        let name: Name = "[::1]:80".parse().unwrap();
        let addrs = name.to_addresses().unwrap();
        assert_eq!(addrs.len(), 1);
        assert!(addrs[0].is_loopback());
    }

    #[test]
    fn parses_bare_ipv4_with_port() {
        let name: Name = "192.0.2.1:8080".parse().unwrap();
        assert_eq!(name.qualifier().port(), Some(8080));
        assert_eq!(
            name.literal_address().unwrap(),
            "192.0.2.1".parse::<any::Address>().unwrap()
        );
    }

    #[test]
    fn parses_bare_ipv4_with_service() {
        let name: Name = "192.0.2.1:https".parse().unwrap();
        assert_eq!(name.qualifier().service(), Some("https"));
    }

    #[test]
    fn parses_bare_ipv6_without_brackets() {
        let name: Name = "2001:db8::1".parse().unwrap();
        assert!(name.is_literal_address());
        assert!(name.qualifier().is_empty());
    }

    #[test]
    fn parses_zoned_ipv6_literal() {
        let name: Name = "[fe80::1%eth0]".parse().unwrap();
        assert_eq!(name.qualifier().zone(), Some("eth0"));
        assert!(name.literal_address().unwrap().is_link_local());
    }

    #[test]
    fn parses_label_sequence() {
        let name: Name = "example.com".parse().unwrap();
        assert_eq!(name.labels(), Some(["example".to_string(), "com".to_string()].as_slice()));
    }

    #[test]
    fn parses_label_sequence_with_port() {
        let name: Name = "example.com:80".parse().unwrap();
        assert_eq!(name.qualifier().port(), Some(80));
        assert_eq!(
            name.labels(),
            Some(["example".to_string(), "com".to_string()].as_slice())
        );
    }

    #[test]
    fn parses_prefix_qualifier() {
        let name: Name = "192.0.2.0/24".parse().unwrap();
        assert_eq!(name.qualifier().prefix_length(), Some(24));
    }

    #[test]
    fn parses_mask_qualifier_and_derives_prefix_length() {
        let name: Name = "192.0.2.1/255.255.255.0".parse().unwrap();
        assert_eq!(name.qualifier().prefix_length(), Some(24));
        assert!(name.qualifier().mask().is_some());
    }

    #[test]
    fn masking_literal_address_applies_on_resolution() {
        let name: Name = "192.0.2.57/255.255.255.0".parse().unwrap();
        let addrs = name.to_addresses().unwrap();
        assert_eq!(addrs[0], "192.0.2.0".parse::<any::Address>().unwrap());
    }

    #[test]
    fn reverse_dns_name_is_detected() {
        let name: Name = "1.2.3.4.in-addr.arpa".parse().unwrap();
        assert!(name.is_reverse_dns());
    }

    #[test]
    fn rejects_empty_name() {
        assert!("".parse::<Name>().is_err());
    }

    #[test]
    fn rejects_unterminated_bracket() {
        assert!("[::1".parse::<Name>().is_err());
    }
}
