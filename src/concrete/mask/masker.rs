//! The range masker: decides whether masking (or OR-ing) every value in an
//! inclusive integer range by a fixed bit pattern still yields a contiguous
//! range, and if so, what its bounds are.
//!
//! This is the numeric core shared by every masking, CIDR, and subnet
//! operation in the crate: applying a netmask to a multi-valued segment,
//! checking whether a wildcard subnet survives re-masking, and deriving the
//! bounds of a [`super::super::addr::Range`] after a bitwise transformation
//! all reduce to one call here.

/// The outcome of masking `{ x & m : lo <= x <= hi }` (or, for
/// [`or`], `{ x | m : lo <= x <= hi }`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Masker<P> {
    /// The minimum value in the masked image.
    pub min: P,
    /// The maximum value in the masked image.
    pub max: P,
    /// [`true`] if the masked image is the full inclusive range
    /// `[min, max]`; [`false`] if masking introduced gaps.
    pub sequential: bool,
}

/// Implemented for the primitive integer types backing an address family,
/// giving each a masked-range computation over its own native width.
pub trait MaskRange: Sized + Copy + PartialEq {
    /// Compute the bounds of `{ x & m : lo <= x <= hi }`.
    ///
    /// # Panics
    ///
    /// Only in debug builds, and only if `lo > hi`.
    fn mask_range(lo: Self, hi: Self, m: Self) -> Masker<Self>;

    /// Compute the bounds of `{ x | m : lo <= x <= hi }`.
    ///
    /// # Panics
    ///
    /// Only in debug builds, and only if `lo > hi`.
    fn or_range(lo: Self, hi: Self, m: Self) -> Masker<Self>;
}

macro_rules! impl_mask_range {
    ($ty:ty) => {
        impl MaskRange for $ty {
            fn mask_range(lo: Self, hi: Self, m: Self) -> Masker<Self> {
                debug_assert!(lo <= hi);
                let (min, max, sequential) = and_bounds(lo, hi, m);
                Masker {
                    min,
                    max,
                    sequential,
                }
            }

            fn or_range(lo: Self, hi: Self, m: Self) -> Masker<Self> {
                debug_assert!(lo <= hi);
                // `x | m == !(!x & !m)`, so the OR-image of `[lo, hi]` under
                // `m` is the bitwise complement of the AND-image of
                // `[!hi, !lo]` under `!m`.
                let (min, max, sequential) = and_bounds(!hi, !lo, !m);
                Masker {
                    min: !max,
                    max: !min,
                    sequential,
                }
            }
        }

        fn and_bounds(lo: $ty, hi: $ty, m: $ty) -> ($ty, $ty, bool) {
            if lo == hi {
                let v = lo & m;
                return (v, v, true);
            }
            // the highest bit at which `lo` and `hi` disagree
            let h = <$ty>::BITS - 1 - (lo ^ hi).leading_zeros();
            let half: $ty = 1 << h;
            let suffix_mask = half - 1;

            let low_lo = lo & suffix_mask;
            let low_hi = hi & suffix_mask;
            let mask_low = m & suffix_mask;
            let bit_h_set = (m >> h) & 1 == 1;

            // every value in `[lo, hi]` has the same bits above `h`; below
            // `h` it splits into a branch with bit `h` clear (suffix ranges
            // over `[low_lo, suffix_mask]`) and a branch with bit `h` set
            // (suffix ranges over `[0, low_hi]`).
            let (min0, max0, cont0) = and_bounds(low_lo, suffix_mask, mask_low);
            let (min1, max1, cont1) = and_bounds(0, low_hi, mask_low);

            if bit_h_set {
                let shifted_min1 = min1 + half;
                let shifted_max1 = max1 + half;
                // contiguous only if the lower branch covers every mask bit
                // below `h` (reaches exactly `suffix_mask`) and the upper
                // branch starts at exactly `half` (i.e. `min1 == 0`), so the
                // two branches abut with no gap at bit `h`.
                let sequential = cont0 && cont1 && max0 == suffix_mask && min1 == 0;
                (min0, shifted_max1, sequential)
            } else {
                let min = min0.min(min1);
                let max = max0.max(max1);
                let adjoin = if min0 <= min1 {
                    min1 <= max0.saturating_add(1)
                } else {
                    min0 <= max1.saturating_add(1)
                };
                let sequential = cont0 && cont1 && adjoin;
                (min, max, sequential)
            }
        }
    };
}

impl_mask_range!(u8);
impl_mask_range!(u16);
impl_mask_range!(u32);
impl_mask_range!(u128);

/// Mask every value in `[lo, hi]` by `m`, returning the bounds of the
/// resulting image and whether it remains contiguous.
pub fn and<P: MaskRange>(lo: P, hi: P, m: P) -> Masker<P> {
    P::mask_range(lo, hi, m)
}

/// OR every value in `[lo, hi]` with `m`, returning the bounds of the
/// resulting image and whether it remains contiguous.
pub fn or<P: MaskRange>(lo: P, hi: P, m: P) -> Masker<P> {
    P::or_range(lo, hi, m)
}
