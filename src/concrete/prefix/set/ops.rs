use core::cmp::{Ordering, PartialEq, PartialOrd};
use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Sub};
use std::borrow::ToOwned;

use num_traits::{One, Zero};

use super::Set;
use crate::traits::{Afi, AfiClass};

impl<A: Afi> Zero for Set<A> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.root.is_some()
    }
}

impl<A: Afi> One for Set<A> {
    fn one() -> Self {
        Self::new()
            .insert(<A as AfiClass>::PrefixRange::ALL)
            .to_owned()
    }
}

impl<A: Afi> BitAnd for Set<A> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self.root, rhs.root) {
            (Some(r), Some(s)) => Self::Output::new_with_root(r & s).aggregate().to_owned(),
            _ => Set::zero(),
        }
    }
}

impl<A: Afi> BitOr for Set<A> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (&self.root, &rhs.root) {
            (Some(r), Some(s)) => Self::Output::new_with_root(r.to_owned() | s.to_owned())
                .aggregate()
                .to_owned(),
            (Some(_), None) => self,
            (None, Some(_)) => rhs,
            (None, None) => Self::Output::zero(),
        }
    }
}

impl<A: Afi> BitXor for Set<A> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        (self.to_owned() | rhs.to_owned()) - (self & rhs)
    }
}

impl<A: Afi> Not for Set<A> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Output::one() - self
    }
}

impl<A: Afi> Add for Set<A> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Self) -> Self::Output {
        self | rhs
    }
}

impl<A: Afi> Sub for Set<A> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (&self.root, &rhs.root) {
            (Some(r), Some(s)) => Self::Output::new_with_root(r.to_owned() - s.to_owned())
                .aggregate()
                .to_owned(),
            _ => self,
        }
    }
}

impl<A: Afi> Mul for Set<A> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, rhs: Self) -> Self::Output {
        self & rhs
    }
}

impl<A: Afi> PartialEq for Set<A> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(r), Some(s)) => r.children().zip(s.children()).all(|(m, n)| m == n),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Afi> PartialOrd for Set<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.prefixes().all(|p| other.contains(p)) {
            Some(Ordering::Less)
        } else if other.prefixes().all(|p| self.contains(p)) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<A: Afi> Eq for Set<A> {}
