use num_traits::{CheckedAdd, One};

use crate::{
    error::{err, Error, Kind},
    traits::{primitive::Address as _, Afi},
};

use super::{Address, Hostmask, Prefix, PrefixLength};

/// Iterator over the subprefixes of a given length within a base prefix.
///
/// Constructed by [`Prefix::subprefixes`][super::Prefix::subprefixes].
pub struct Subprefixes<A: Afi> {
    next: Option<Address<A>>,
    end: Address<A>,
    length: PrefixLength<A>,
    hostmask: Hostmask<A>,
}

impl<A: Afi> Subprefixes<A> {
    pub(super) fn new(base: Prefix<A>, length: PrefixLength<A>) -> Result<Self, Error> {
        if length < base.length() {
            Err(err!(Kind::PrefixLength))
        } else {
            let hostmask = Hostmask::from(length);
            Ok(Self {
                next: Some(base.prefix()),
                end: base.prefix() | hostmask,
                length,
                hostmask,
            })
        }
    }
}

impl<A: Afi> Iterator for Subprefixes<A> {
    type Item = Prefix<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let item = Prefix::new(current, self.length);
        let block_end = current | self.hostmask;
        self.next = block_end
            .into_primitive()
            .checked_add(&A::Primitive::one())
            .map(Address::new)
            .filter(|next| *next <= self.end);
        Some(item)
    }
}
