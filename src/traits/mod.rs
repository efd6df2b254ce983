mod addr;
pub use self::addr::Address;

mod af;
pub use self::af::{Afi, AfiClass};

mod mask;
pub use self::mask::{Bitmask, Hostmask, Mask, Netmask};

mod interface;
pub use self::interface::Interface;

mod prefix;
pub use self::prefix::{Length as PrefixLength, Prefix};
pub use self::prefix::Range as PrefixRange;
#[cfg(feature = "std")]
pub use self::prefix::Set as PrefixSet;

pub mod primitive;
