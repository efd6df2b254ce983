use core::fmt;

use crate::{
    concrete::{Ipv4, Ipv6},
    traits::{
        primitive::{self, IntoIpv6Segments as _},
        Afi,
    },
};

#[derive(Copy, Clone, Default)]
struct Span {
    start: usize,
    length: usize,
}

fn fmt_segments(segments: &[u16], sep: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some((first, tail)) = segments.split_first() {
        write!(f, "{:x}", first)?;
        tail.iter()
            .try_for_each(|segment| write!(f, "{}{:x}", sep, segment))?;
    }
    Ok(())
}

/// TODO: implement directly for `ConcreteAddress`, using `::octets()`
/// IP address style formatting.
pub trait AddressDisplay<A: Afi> {
    /// Format `Self` using the canical respresentation for IP addresses of
    /// address-family `A`.
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<P: primitive::Address<Ipv4>> AddressDisplay<Ipv4> for P {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_be_bytes().fmt_addr(f)
    }
}

#[allow(clippy::many_single_char_names)]
impl AddressDisplay<Ipv4> for <Ipv4 as Afi>::Octets {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

#[allow(clippy::many_single_char_names)]
impl<P: primitive::Address<Ipv6>> AddressDisplay<Ipv6> for P {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.into_segments() {
            // TODO:
            // Use `P::UNSPECIFIED` and `P::LOCALHOST` to derive const
            // patterns here.
            // Needs `const_trait_impl`.
            [0, 0, 0, 0, 0, 0, 0, 0] => f.write_str("::"),
            [0, 0, 0, 0, 0, 0, 0, 1] => f.write_str("::1"),
            [0, 0, 0, 0, 0, mapped @ (0 | 0xffff), high, low] => {
                f.write_str("::")?;
                if mapped == 0xffff {
                    f.write_str("ffff:")?;
                }
                let [a, b] = high.to_be_bytes();
                let [c, d] = low.to_be_bytes();
                ([a, b, c, d]).fmt_addr(f)
            }
            segments => {
                let (head, tail) = {
                    let mut longest = Span::default();
                    let mut current = Span::default();
                    segments.iter().enumerate().for_each(|(i, segment)| {
                        if segment == &0 {
                            if current.length == 0 {
                                current.start = i;
                            }
                            current.length += 1;
                            if current.length > longest.length {
                                longest = current;
                            }
                        } else {
                            current = Span::default();
                        }
                    });
                    if longest.length > 1 {
                        (
                            &segments[0..longest.start],
                            Some(&segments[longest.start + longest.length..]),
                        )
                    } else {
                        (&segments[..], None)
                    }
                };
                fmt_segments(head, ':', f)?;
                if let Some(tail) = tail {
                    f.write_str("::")?;
                    fmt_segments(tail, ':', f)?;
                }
                Ok(())
            }
        }
    }
}
