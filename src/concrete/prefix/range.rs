use core::cmp::{max, min, Ordering};
use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any_with, Arbitrary, ParamsFor},
    strategy::{BoxedStrategy, Just, Strategy},
};

use crate::{
    any,
    error::{err, Error, Kind},
    traits::{self, Afi, Prefix as _},
};

#[cfg(any(test, feature = "arbitrary"))]
use crate::traits::primitive;

use super::{impl_try_from_any, Ipv4, Ipv6, Prefix, PrefixLength};

mod private {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// A set of [`Prefix<A>`] covered by a common super-prefix, each having a
    /// pref-length within a contigious range.
    #[derive(Clone, Debug, Hash, PartialEq, Eq)]
    pub struct Range<A: Afi> {
        prefix: Prefix<A>,
        len_range: RangeInclusive<PrefixLength<A>>,
    }

    impl<A: Afi> Range<A> {
        /// Construct a new [`Self`] from a convering [`Prefix<A>`] and an
        /// inclusive range of [`PrefixLength`]..
        ///
        /// # Errors
        ///
        /// Construction will fail if either:
        ///
        /// - `prefix.length() > len_range.start()`; or
        /// - `len_range.start() > len_range.end()`
        pub fn new(
            prefix: Prefix<A>,
            len_range: RangeInclusive<PrefixLength<A>>,
        ) -> Result<Self, Error> {
            if &prefix.length() <= len_range.start() && len_range.start() <= len_range.end() {
                Ok(Self { prefix, len_range })
            } else {
                Err(err!(Kind::PrefixLengthRange))
            }
        }

        pub const fn prefix(&self) -> Prefix<A> {
            self.prefix
        }

        pub const fn lower(&self) -> PrefixLength<A> {
            *self.len_range.start()
        }

        pub const fn upper(&self) -> PrefixLength<A> {
            *self.len_range.end()
        }
    }
}

pub use self::private::Range;

impl<A: Afi> traits::PrefixRange for Range<A> {
    type Prefix = Prefix<A>;
    type Length = PrefixLength<A>;

    fn prefix(&self) -> Self::Prefix {
        self.prefix()
    }

    fn lower(&self) -> Self::Length {
        self.lower()
    }

    fn upper(&self) -> Self::Length {
        self.upper()
    }

    fn with_length_range(self, len_range: RangeInclusive<Self::Length>) -> Option<Self> {
        let lower = max(self.lower(), *len_range.start());
        let upper = min(self.upper(), *len_range.end());
        Self::new(self.prefix(), lower..=upper).ok()
    }
}

#[allow(clippy::fallible_impl_from)]
impl<A: Afi> From<Prefix<A>> for Range<A> {
    fn from(prefix: Prefix<A>) -> Self {
        // OK to unwrap here as we can guarantee the checks in `new()` will
        // pass.
        Self::new(prefix, prefix.length()..=prefix.length()).unwrap()
    }
}

impl_try_from_any! {
    any::PrefixRange {
        any::PrefixRange::Ipv4 => Range<Ipv4>,
        any::PrefixRange::Ipv6 => Range<Ipv6>,
    }
}

impl<A: Afi> fmt::Display for Range<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.prefix(), self.lower(), self.upper())
    }
}

/// Parses the textual form `<prefix>,<lower>,<upper>` (e.g.
/// `"192.0.2.0/24,25,27"`), where `<lower>` and `<upper>` are prefix-lengths
/// bounding the range of more-specific prefix lengths covered. Either or
/// both of `<lower>` and `<upper>` may be omitted, defaulting to the length
/// of `<prefix>` and to `<lower>` respectively.
impl<A: Afi> FromStr for Range<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let prefix: Prefix<A> = parts
            .next()
            .ok_or_else(|| err!(Kind::AddressString(crate::error::ParserError::TooFewSegments)))?
            .parse()?;
        let lower = match parts.next() {
            Some(s) => s.parse()?,
            None => prefix.length(),
        };
        let upper = match parts.next() {
            Some(s) => s.parse()?,
            None => lower,
        };
        Self::new(prefix, lower..=upper)
    }
}

impl<A: Afi> IntoIterator for Range<A> {
    type Item = Prefix<A>;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        let covering = self.prefix();
        let lower = self.lower();
        let upper = self.upper();
        IntoIter {
            covering,
            current: covering.subprefixes(lower).ok(),
            next_len: lower.increment().ok().filter(|l| *l <= upper),
            upper,
        }
    }
}

/// Iterator over the [`Prefix<A>`] values covered by a [`Range<A>`], ordered
/// first by prefix length then by address.
pub struct IntoIter<A: Afi> {
    covering: Prefix<A>,
    current: Option<super::Subprefixes<A>>,
    next_len: Option<PrefixLength<A>>,
    upper: PrefixLength<A>,
}

impl<A: Afi> Iterator for IntoIter<A> {
    type Item = Prefix<A>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(iter) = self.current.as_mut() {
                if let Some(prefix) = iter.next() {
                    return Some(prefix);
                }
            } else {
                return None;
            }
            let len = self.next_len.take()?;
            self.current = self.covering.subprefixes(len).ok();
            self.next_len = len.increment().ok().filter(|l| *l <= self.upper);
        }
    }
}

impl<A: Afi> PartialOrd for Range<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.prefix().partial_cmp(&other.prefix()) {
            _ if self == other => Some(Ordering::Equal),
            Some(Ordering::Less | Ordering::Equal)
                if other.lower() <= self.lower() && self.upper() <= other.upper() =>
            {
                Some(Ordering::Less)
            }
            Some(Ordering::Greater | Ordering::Equal)
                if self.lower() <= other.lower() && other.upper() <= self.upper() =>
            {
                Some(Ordering::Greater)
            }
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "arbitrary"))]
impl<A> Arbitrary for Range<A>
where
    A: Afi + 'static,
    A::Primitive: Arbitrary,
    RangeInclusive<<A::Primitive as primitive::Address<A>>::Length>:
        Strategy<Value = <A::Primitive as primitive::Address<A>>::Length>,
{
    type Parameters = ParamsFor<Prefix<A>>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        any_with::<Prefix<A>>(params)
            .prop_flat_map(|prefix| {
                (
                    Just(prefix),
                    (prefix.length().into_primitive()
                        ..=<A::Primitive as primitive::Address<A>>::MAX_LENGTH)
                        .prop_flat_map(|lower| {
                            (
                                Just(lower),
                                lower..=<A::Primitive as primitive::Address<A>>::MAX_LENGTH,
                            )
                        })
                        .prop_map(|(lower, upper)| {
                            <A as traits::AfiClass>::PrefixLength::from_primitive(lower).unwrap()
                                ..=<A as traits::AfiClass>::PrefixLength::from_primitive(upper)
                                    .unwrap()
                        }),
                )
            })
            .prop_map(|(prefix, len_range)| Self::new(prefix, len_range).unwrap())
            .boxed()
    }
}
