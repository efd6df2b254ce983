use core::ops::RangeInclusive;
use core::str::FromStr;

use num_traits::{CheckedSub, One};

use super::Address;
use crate::{
    concrete::mask::masker,
    error::{err, Error, Kind},
    parser,
    traits::{
        primitive::{self, Address as _, Length as _},
        Afi,
    },
    Ipv4, Ipv6,
};

type HostBits<A> = <<A as Afi>::Primitive as primitive::Address<A>>::Length;

/// An ordered, inclusive `[lower, upper]` pair of [`Address<A>`], containing
/// every address in between.
///
/// Unlike [`Prefix<A>`][crate::concrete::Prefix], a [`Range<A>`] need not be
/// expressible as a single CIDR block.
///
/// # Example
///
/// ``` rust
/// use ip::{concrete::AddressRange, Ipv4};
///
/// let range = AddressRange::<Ipv4>::new("10.250.0.0".parse()?, "10.252.255.255".parse()?);
///
/// let mid = "10.251.127.1".parse()?;
///
/// assert!(range.contains(&mid));
/// # Ok::<(), ip::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range<A: Afi> {
    lower: Address<A>,
    upper: Address<A>,
}

impl<A: Afi> Range<A> {
    /// Construct a new [`Range<A>`] from `start` and `end` bounds.
    pub const fn new(start: Address<A>, end: Address<A>) -> Self {
        Self {
            lower: start,
            upper: end,
        }
    }

    /// Get the lower bound of this range.
    pub const fn lower(&self) -> Address<A> {
        self.lower
    }

    /// Get the upper bound of this range.
    pub const fn upper(&self) -> Address<A> {
        self.upper
    }

    /// Returns [`true`] if `addr` is contained in the range.
    ///
    /// This is the sequential closure: every address numerically between
    /// [`lower`][Self::lower] and [`upper`][Self::upper], inclusive. It is
    /// not the same test as the division-wise "subnet" object parsed from
    /// a joined form like `"1-2.3.4.5"` or `"1.2.*.*"` — see
    /// [`Ipv4Subnet`][crate::concrete::Ipv4Subnet] /
    /// [`Ipv6Subnet`][crate::concrete::Ipv6Subnet] for that narrower
    /// containment test, which `1.200.4.5` fails against `1-2.3.4.5` even
    /// though this method's closure contains it.
    pub fn contains(&self, addr: &Address<A>) -> bool {
        self.lower() <= *addr && *addr <= self.upper()
    }

    /// Returns [`true`] if `other` is entirely contained within `self`.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.lower() <= other.lower() && other.upper() <= self.upper()
    }

    /// Returns [`true`] if `self` and `other` share at least one address.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }

    /// Returns [`true`] if `self` and `other` overlap or are immediately
    /// adjacent (no address lies strictly between them).
    pub fn is_adjoining(&self, other: &Self) -> bool {
        if self.overlaps(other) {
            return true;
        }
        let (lower, higher) = if self.lower() <= other.lower() {
            (self, other)
        } else {
            (other, self)
        };
        successor(lower.upper()).is_some_and(|next| next == higher.lower())
    }

    /// Compute the intersection of `self` and `other`, if they overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let lower = self.lower().max(other.lower());
        let upper = self.upper().min(other.upper());
        (lower <= upper).then(|| Self::new(lower, upper))
    }

    /// Lazily enumerate every individual [`Address<A>`] in the range, in
    /// ascending order.
    pub fn iter(&self) -> Iter<A> {
        Iter {
            next: Some(self.lower()),
            upper: self.upper(),
        }
    }

    /// Consolidate a collection of (possibly overlapping or adjacent)
    /// ranges into the minimal sorted list of disjoint, non-adjoining
    /// ranges whose union is the same set of addresses.
    #[cfg(feature = "std")]
    pub fn join<I>(ranges: I) -> std::vec::Vec<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sorted: std::vec::Vec<Self> = ranges.into_iter().collect();
        sorted.sort_by_key(Self::lower);

        let mut merged: std::vec::Vec<Self> = std::vec::Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if last.is_adjoining(&range) => {
                    *last = Self::new(last.lower(), last.upper().max(range.upper()));
                }
                _ => merged.push(range),
            }
        }
        merged
    }

    /// Mask every address in this range by `mask`, returning the resulting
    /// range if the masked image remains contiguous.
    ///
    /// This is the range masker (the numeric core described for divisions
    /// and segments) applied directly at the full address width, rather
    /// than per-segment: masking `1.2.*.*` by `255.255.0.0` collapses to
    /// the single address `1.2.0.0`, while masking `1.2-3.4.5` by
    /// `255.0.255.0` straddles a bit the mask does not clear and fails.
    ///
    /// # Errors
    ///
    /// Returns [`Kind::IncompatibleAddress`] if `{ x & mask : lower <= x <=
    /// upper }` is not itself a contiguous range.
    pub fn mask(&self, mask: Address<A>) -> Result<Self, Error> {
        let result = masker::and(
            self.lower().into_primitive(),
            self.upper().into_primitive(),
            mask.into_primitive(),
        );
        if result.sequential {
            Ok(Self::new(Address::new(result.min), Address::new(result.max)))
        } else {
            Err(err!(
                Kind::IncompatibleAddress,
                "mask does not preserve a contiguous range"
            ))
        }
    }

    /// Returns the unique [`Prefix<A>`][crate::concrete::Prefix] equal to
    /// this range, if the range is exactly one CIDR block.
    #[cfg(feature = "std")]
    pub fn as_prefix_block(&self) -> Option<crate::concrete::Prefix<A>> {
        let mut blocks = self.spanning_prefix_blocks();
        match (blocks.pop(), blocks.is_empty()) {
            (Some(block), true) => Some(block),
            _ => None,
        }
    }

    /// Compute the unique, minimal, address-ordered list of CIDR blocks
    /// ([`Prefix<A>`][crate::concrete::Prefix]) whose union is exactly this
    /// range.
    #[cfg(feature = "std")]
    pub fn spanning_prefix_blocks(&self) -> std::vec::Vec<crate::concrete::Prefix<A>> {
        use crate::concrete::{Prefix, PrefixLength};

        let mut blocks = std::vec::Vec::new();
        let mut start = self.lower().into_primitive();
        let end = self.upper().into_primitive();

        loop {
            // the number of trailing zero bits in `start` bounds the
            // largest block alignment available at this starting point.
            let mut host_bits = start.trailing_zeros();
            loop {
                let block_end = block_end(start, host_bits);
                if block_end <= end {
                    break;
                }
                host_bits = host_bits - HostBits::<A>::ONE;
            }
            let prefix_len = A::Primitive::MAX_LENGTH - host_bits;
            // ok to unwrap: `prefix_len` is always within `[0, MAX_LENGTH]`
            let len = PrefixLength::<A>::from_primitive(prefix_len).unwrap();
            blocks.push(Prefix::new(Address::new(start), len));

            let end_of_block = block_end(start, host_bits);
            if end_of_block == end {
                break;
            }
            // ok to unwrap: `end_of_block < end <= A::Primitive::ONES`
            start = end_of_block.checked_add(&A::Primitive::one()).unwrap();
        }
        blocks
    }
}

/// The last address of a block of `2^host_bits` addresses starting at
/// `start` (or `A::Primitive::ONES` if `host_bits` spans the whole address
/// space).
fn block_end<A: Afi>(start: A::Primitive, host_bits: HostBits<A>) -> A::Primitive {
    if host_bits == A::Primitive::MAX_LENGTH {
        A::Primitive::ONES
    } else {
        let size_minus_one = (A::Primitive::one() << host_bits)
            .checked_sub(&A::Primitive::one())
            .unwrap();
        start | size_minus_one
    }
}

fn successor<A: Afi>(addr: Address<A>) -> Option<Address<A>> {
    addr.into_primitive()
        .checked_add(&A::Primitive::one())
        .map(Address::new)
}

/// Lazy ascending iterator over every [`Address<A>`] in a [`Range<A>`].
pub struct Iter<A: Afi> {
    next: Option<Address<A>>,
    upper: Address<A>,
}

impl<A: Afi> Iterator for Iter<A> {
    type Item = Address<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.upper {
            None
        } else {
            successor(current)
        };
        Some(current)
    }
}

impl<A: Afi> IntoIterator for Range<A> {
    type Item = Address<A>;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Afi> From<&RangeInclusive<A::Primitive>> for Range<A> {
    fn from(range: &RangeInclusive<A::Primitive>) -> Self {
        Self::new(Address::new(*range.start()), Address::new(*range.end()))
    }
}

impl<A: Afi> From<Address<A>> for Range<A> {
    fn from(addr: Address<A>) -> Self {
        Self::new(addr, addr)
    }
}

/// Parses a dotted-quad IPv4 subnet expression in which any octet may carry a
/// `*` wildcard or an `a-b` range, e.g. `"1.2.*.*"` or `"1-2.3.4.5"`. A plain
/// address (no wildcards or ranges) parses to the single-address range
/// `[addr, addr]`.
impl FromStr for Range<Ipv4> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::ipv4::parse_range(s)
            .map(|(lower, upper)| Self::new(Address::new(lower), Address::new(upper)))
    }
}

/// Parses a colon-separated IPv6 subnet expression in which any hextet may
/// carry a `*` wildcard or an `a-b` range, e.g. `"2001:db8:*:*:*:*:*:*"`.
/// This form requires all 8 hextets spelled out and does not combine with
/// `::` compression.
impl FromStr for Range<Ipv6> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::ipv6::parse_range(s)
            .map(|(lower, upper)| Self::new(Address::new(lower), Address::new(upper)))
    }
}
