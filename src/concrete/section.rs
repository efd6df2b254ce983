//! The division/segment/section algebra.
//!
//! A [`Segment<T>`] is one division's `[lower, upper]` bound. A
//! [`Section<T, N>`] is a fixed-size array of divisions: the Cartesian
//! product of per-division bounds that a textual form like `"1-2.3.4.5"`
//! or `"2001:db8:*:*:*:*:*:*"` actually describes — exactly the addresses
//! reachable by choosing, independently, a value from each division's
//! range. This is narrower than the sequential range closure over the same
//! bounds (see [`super::AddressRange`]), which additionally contains every
//! address *between* the lowest and highest value regardless of whether it
//! is expressible division-by-division.
use core::fmt;

use crate::error::{err, Error, Kind};

/// One division's inclusive `[lower, upper]` bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment<T> {
    lower: T,
    upper: T,
}

impl<T: DivisionValue> Segment<T> {
    /// Construct a segment spanning `[lower, upper]`. Swaps the arguments
    /// if `lower > upper`, so the result is always a valid segment.
    #[must_use]
    pub fn new(lower: T, upper: T) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    /// A segment containing exactly `value`.
    #[must_use]
    pub const fn exact(value: T) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// A segment spanning every value of `T` (the full-range wildcard).
    #[must_use]
    pub const fn full() -> Self {
        Self {
            lower: T::ZERO,
            upper: T::MAX,
        }
    }

    /// The lower bound.
    #[must_use]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// The upper bound.
    #[must_use]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns [`true`] if this segment is a single exact value.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns [`true`] if this segment spans every value of `T`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.lower == T::ZERO && self.upper == T::MAX
    }

    /// Returns [`true`] if `value` falls within `[lower, upper]`.
    #[must_use]
    pub fn contains_value(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns [`true`] if `other`'s bound is entirely within `self`'s.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Reverse the bit order of both bounds independently.
    ///
    /// Bit reversal is not monotonic, so this is only meaningful for an
    /// exact segment (the bound of an address literal, not a range); for a
    /// non-exact segment the bounds are re-sorted after reversal so the
    /// result remains a valid `[lower, upper]` pair, but it no longer
    /// corresponds to "the reversal of every value in the original range".
    #[must_use]
    pub fn reverse_bits(&self) -> Self {
        Self::new(self.lower.rev_bits(), self.upper.rev_bits())
    }

    /// Swap the byte order of both bounds independently. See
    /// [`reverse_bits`][Self::reverse_bits] for the same caveat about
    /// non-exact segments.
    #[must_use]
    pub fn swap_bytes(&self) -> Self {
        Self::new(self.lower.byte_swap(), self.upper.byte_swap())
    }
}

impl<T: DivisionValue + fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full() {
            f.write_str("*")
        } else if self.is_exact() {
            write!(f, "{}", self.lower)
        } else {
            write!(f, "{}-{}", self.lower, self.upper)
        }
    }
}

impl<T: DivisionValue + fmt::LowerHex> fmt::LowerHex for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full() {
            f.write_str("*")
        } else if self.is_exact() {
            write!(f, "{:x}", self.lower)
        } else {
            write!(f, "{:x}-{:x}", self.lower, self.upper)
        }
    }
}

/// Implemented by the primitive integer type backing one division of a
/// [`Section<T, N>`]: `u8` for IPv4 octets, `u16` for IPv6 hextets.
pub trait DivisionValue:
    Copy + fmt::Debug + Default + Eq + Ord + core::hash::Hash + 'static
{
    /// The all-zeros value.
    const ZERO: Self;
    /// The all-ones value.
    const MAX: Self;
    /// The bit width of this division.
    const BITS: u32;

    /// Bitwise AND.
    fn bitand(self, rhs: Self) -> Self;
    /// Bitwise OR.
    fn bitor(self, rhs: Self) -> Self;
    /// Bitwise NOT.
    fn not(self) -> Self;
    /// Reverse the order of the bits making up this value.
    fn rev_bits(self) -> Self;
    /// Swap the byte order of this value.
    fn byte_swap(self) -> Self;
    /// The successor of this value, or [`None`] at [`DivisionValue::MAX`].
    fn checked_succ(self) -> Option<Self>;
    /// The netmask with `prefix_bits` leading one-bits, clamped to
    /// `[0, BITS]`.
    fn netmask(prefix_bits: u32) -> Self;
}

macro_rules! impl_division_value {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl DivisionValue for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;
                const BITS: u32 = <$ty>::BITS;

                fn bitand(self, rhs: Self) -> Self {
                    self & rhs
                }
                fn bitor(self, rhs: Self) -> Self {
                    self | rhs
                }
                fn not(self) -> Self {
                    !self
                }
                fn rev_bits(self) -> Self {
                    self.reverse_bits()
                }
                fn byte_swap(self) -> Self {
                    self.swap_bytes()
                }
                fn checked_succ(self) -> Option<Self> {
                    self.checked_add(1)
                }
                fn netmask(prefix_bits: u32) -> Self {
                    let prefix_bits = prefix_bits.min(Self::BITS);
                    if prefix_bits == 0 {
                        0
                    } else {
                        <$ty>::MAX << (Self::BITS - prefix_bits)
                    }
                }
            }
        )*
    };
}
impl_division_value!(u8, u16);

/// A fixed-size array of [`Segment<T>`]: the Cartesian-product "subnet"
/// object described by spec section 3/4.2, distinct from the sequential
/// range closure over the same bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Section<T, const N: usize> {
    segments: [Segment<T>; N],
}

impl<T: DivisionValue, const N: usize> Section<T, N> {
    /// Build a section directly from its per-division segments.
    #[must_use]
    pub const fn from_segments(segments: [Segment<T>; N]) -> Self {
        Self { segments }
    }

    /// Build a section of all-exact segments from a per-division value
    /// array (e.g. the octets of an IPv4 address).
    #[must_use]
    pub fn from_values(values: [T; N]) -> Self {
        Self::from_segments(values.map(Segment::exact))
    }

    /// The per-division segments making up this section.
    #[must_use]
    pub const fn segments(&self) -> &[Segment<T>; N] {
        &self.segments
    }

    /// Returns [`true`] if this section's segments are all exact (it
    /// denotes a single address).
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.segments.iter().all(Segment::is_exact)
    }

    /// Returns [`true`] if every division of `value` falls within this
    /// section's corresponding segment.
    #[must_use]
    pub fn contains_value(&self, value: &[T; N]) -> bool {
        self.segments
            .iter()
            .zip(value.iter())
            .all(|(segment, value)| segment.contains_value(*value))
    }

    /// Returns [`true`] if every one of `other`'s segments is contained in
    /// the corresponding segment of `self`.
    ///
    /// This is division-wise containment, not the sequential-range
    /// "between the endpoints" test: `"1-2.3.4.5"` does not contain
    /// `"1.200.4.5"`, even though `1.200.4.5` lies between `1.3.4.5` and
    /// `2.3.4.5` as plain integers.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.segments
            .iter()
            .zip(other.segments.iter())
            .all(|(a, b)| a.contains(b))
    }

    /// Derive the prefix block of length `prefix_bits`, treating this
    /// section's lower bound in each division as the network base: every
    /// division entirely within the prefix is left exact, the division
    /// straddled by the prefix boundary (if any) becomes the narrowest
    /// segment compatible with it, and every later division becomes the
    /// full-range wildcard.
    #[must_use]
    pub fn to_prefix_block(&self, prefix_bits: u32) -> Self {
        let div_bits = T::BITS;
        let mut bits_seen = 0u32;
        let segments = self.segments.map(|segment| {
            let value = segment.lower();
            let result = if bits_seen >= prefix_bits {
                Segment::full()
            } else if bits_seen + div_bits <= prefix_bits {
                Segment::exact(value)
            } else {
                let mask = T::netmask(prefix_bits - bits_seen);
                let network = value.bitand(mask);
                let broadcast = network.bitor(mask.not());
                Segment::new(network, broadcast)
            };
            bits_seen += div_bits;
            result
        });
        Self { segments }
    }

    /// Returns the prefix length of which this section is the exact
    /// prefix block, if it is division-aligned: every division up to the
    /// boundary is exact, and every division after it is the full-range
    /// wildcard. A prefix boundary that falls inside a division (rather
    /// than between two of them) is not recognized by this method.
    #[must_use]
    pub fn to_prefix_block_len(&self) -> Option<u32> {
        let div_bits = T::BITS;
        let mut wildcard_tail = true;
        let mut prefix_divisions = 0u32;
        for segment in self.segments.iter().rev() {
            if wildcard_tail && segment.is_full() {
                continue;
            }
            wildcard_tail = false;
            if !segment.is_exact() {
                return None;
            }
            prefix_divisions += 1;
        }
        Some(prefix_divisions * div_bits)
    }

    /// Mask each division of this section by the corresponding division of
    /// `mask`, deferring to the range masker ([`masker::and`]/
    /// [`masker::or`]) so that a division whose masked image is no longer
    /// contiguous is rejected rather than silently mis-reported.
    ///
    /// When `retain_prefix` is `true`, each division's own `[lower, upper]`
    /// is AND-masked as a range (the strict network/host split); this can
    /// turn an exact segment into an exact (masked) segment, but a
    /// non-exact segment whose masked image has gaps (e.g. `[0, 2]` masked
    /// by `0b10`, whose image `{0, 2}` skips `1`) is rejected.
    ///
    /// When `retain_prefix` is `false`, bits cleared by the mask are
    /// treated as unconstrained rather than zeroed: the AND-masked image is
    /// then OR-masked by the bitwise complement of `mask`, widening every
    /// masked-off bit to its broadest value consistent with the mask. This
    /// second step can also introduce gaps (OR-ing a contiguous range by a
    /// fixed pattern is not itself always contiguous), so it is checked
    /// the same way.
    ///
    /// # Errors
    ///
    /// Returns [`Kind::IncompatibleAddress`] if any division's masked image
    /// is not itself a contiguous range.
    pub fn mask(&self, mask: &Self, retain_prefix: bool) -> Result<Self, Error> {
        use crate::concrete::mask::masker::{self, MaskRange as _};

        let mut segments = self.segments;
        for i in 0..N {
            let segment = self.segments[i];
            let m = mask.segments[i].lower();
            let anded = masker::and(segment.lower(), segment.upper(), m);
            if !anded.sequential {
                return Err(err!(
                    Kind::IncompatibleAddress,
                    "mask does not preserve a contiguous division"
                ));
            }
            segments[i] = if retain_prefix {
                Segment::new(anded.min, anded.max)
            } else {
                let ored = masker::or(anded.min, anded.max, m.not());
                if !ored.sequential {
                    return Err(err!(
                        Kind::IncompatibleAddress,
                        "mask does not preserve a contiguous division"
                    ));
                }
                Segment::new(ored.min, ored.max)
            };
        }
        Ok(Self { segments })
    }

    /// Reverse the bit order of the whole section: the division order is
    /// reversed, and each division's bounds have their bits reversed.
    ///
    /// # Errors
    ///
    /// Bit reversal is not monotonic, so this only preserves contiguity
    /// for an all-exact section (a parsed address, not a range). Returns
    /// [`Kind::IncompatibleAddress`] if any division is a multi-value
    /// range rather than an exact value.
    pub fn reverse_bits(&self) -> Result<Self, Error> {
        if !self.is_exact() {
            return Err(err!(
                Kind::IncompatibleAddress,
                "cannot reverse bits of a multi-value section"
            ));
        }
        let mut segments = self.segments;
        segments.reverse();
        for segment in &mut segments {
            *segment = segment.reverse_bits();
        }
        Ok(Self { segments })
    }

    /// Reverse the byte order of the whole section: the division order is
    /// reversed, and each division's bounds have their byte order swapped.
    ///
    /// # Errors
    ///
    /// Same restriction as [`reverse_bits`][Self::reverse_bits]: returns
    /// [`Kind::IncompatibleAddress`] if any division is a multi-value
    /// range rather than an exact value.
    pub fn reverse_bytes(&self) -> Result<Self, Error> {
        if !self.is_exact() {
            return Err(err!(
                Kind::IncompatibleAddress,
                "cannot reverse bytes of a multi-value section"
            ));
        }
        let mut segments = self.segments;
        segments.reverse();
        for segment in &mut segments {
            *segment = segment.swap_bytes();
        }
        Ok(Self { segments })
    }

    /// Re-derive the prefix block of length `new_prefix_bits`, using this
    /// section's current lower bound in each division as the network base.
    #[must_use]
    pub fn adjust_prefix(&self, new_prefix_bits: u32) -> Self {
        let base: [T; N] = core::array::from_fn(|i| self.segments[i].lower());
        Self::from_values(base).to_prefix_block(new_prefix_bits)
    }

    /// Replace divisions `[i, j)` of `self` with divisions `[oi, oj)` of
    /// `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Kind::SizeMismatch`] if the two spans do not have the
    /// same length.
    pub fn replace(&self, i: usize, j: usize, other: &Self, oi: usize, oj: usize) -> Result<Self, Error> {
        if j - i != oj - oi {
            return Err(err!(Kind::SizeMismatch));
        }
        let mut segments = self.segments;
        segments[i..j].copy_from_slice(&other.segments[oi..oj]);
        Ok(Self { segments })
    }

    /// Lazily enumerate every concrete per-division value array reachable
    /// by this section, in ascending, least-significant-division-first
    /// order.
    #[must_use]
    pub fn iterator(&self) -> SectionIter<T, N> {
        let start: [T; N] = core::array::from_fn(|i| self.segments[i].lower());
        SectionIter {
            section: *self,
            next: Some(start),
        }
    }
}

impl<T: DivisionValue + fmt::Display, const N: usize> fmt::Display for Section<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Lazy, odometer-style enumeration of every value array a [`Section<T,
/// N>`] contains, produced by [`Section::iterator`].
#[derive(Clone, Debug)]
pub struct SectionIter<T, const N: usize> {
    section: Section<T, N>,
    next: Option<[T; N]>,
}

impl<T: DivisionValue, const N: usize> Iterator for SectionIter<T, N> {
    type Item = [T; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut advanced = current;
        let mut carry_at = None;
        for i in (0..N).rev() {
            if let Some(succ) = advanced[i].checked_succ() {
                if succ <= self.section.segments[i].upper() {
                    advanced[i] = succ;
                    carry_at = Some(i);
                    break;
                }
            }
        }
        self.next = carry_at.map(|i| {
            for (j, value) in advanced.iter_mut().enumerate().skip(i + 1) {
                *value = self.section.segments[j].lower();
            }
            advanced
        });
        Some(current)
    }
}

/// An IPv4 subnet: the Cartesian product of four octet segments.
pub type Ipv4Section = Section<u8, 4>;
/// An IPv6 subnet: the Cartesian product of eight hextet segments.
pub type Ipv6Section = Section<u16, 8>;
