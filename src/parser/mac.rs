use crate::error::{err, Error, Kind, ParserError};

use super::Parser;

/// Parse a 48-bit (EUI-48) MAC address in any of its accepted textual
/// forms: six colon- or hyphen-separated hex octets, three dot- or
/// space-separated 16-bit hex groups, or a single unseparated run of 12 hex
/// digits.
///
/// The form is decided by a single forward peek at the separator position
/// (byte 2 for the six-group forms, byte 4 for the three-group forms) so
/// only one grammar is ever attempted: there is no re-parse of the whole
/// input under a different hypothesis if that attempt fails.
pub fn parse_eui48(input: &str) -> Result<[u8; 6], Error> {
    let invalid = || err!(Kind::AddressString(ParserError::InvalidCharacter), offending: input);
    let bytes = input.as_bytes();
    match (bytes.get(2), bytes.get(4)) {
        (Some(b':'), _) => Parser::new(input)
            .take_only(|p| p.take_byte_groups::<6>(b":", 6))
            .ok_or_else(invalid),
        (Some(b'-'), _) => Parser::new(input)
            .take_only(|p| p.take_byte_groups::<6>(b"-", 6))
            .ok_or_else(invalid),
        (_, Some(b'.')) => Parser::new(input)
            .take_only(|p| p.take_u16_groups::<6>(b".", 3))
            .ok_or_else(invalid),
        (_, Some(b' ')) => Parser::new(input)
            .take_only(|p| p.take_u16_groups::<6>(b" ", 3))
            .ok_or_else(invalid),
        _ => Parser::new(input)
            .take_only(|p| p.take_hex_run::<6>(12))
            .ok_or_else(invalid),
    }
}

/// Parse an extended, 64-bit (EUI-64) MAC address: eight colon- or
/// hyphen-separated hex octets.
///
/// As with [`parse_eui48`], the separator byte decides the grammar up
/// front; only one attempt is ever made.
pub fn parse_eui64(input: &str) -> Result<[u8; 8], Error> {
    let invalid = || err!(Kind::AddressString(ParserError::InvalidCharacter), offending: input);
    match input.as_bytes().get(2) {
        Some(b':') => Parser::new(input)
            .take_only(|p| p.take_byte_groups::<8>(b":", 8))
            .ok_or_else(invalid),
        Some(b'-') => Parser::new(input)
            .take_only(|p| p.take_byte_groups::<8>(b"-", 8))
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_colon_form() {
        let addr = parse_eui48("a0:b0:c0:d0:e0:f0").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
    }

    #[test]
    fn six_hyphen_form() {
        let addr = parse_eui48("a0-b0-c0-d0-e0-f0").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
    }

    #[test]
    fn three_dotted_form() {
        let addr = parse_eui48("a0b0.c0d0.e0f0").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
    }

    #[test]
    fn three_space_dotted_form() {
        let addr = parse_eui48("a0b0 c0d0 e0f0").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
    }

    #[test]
    fn single_segment_form() {
        let addr = parse_eui48("a0b0c0d0e0f0").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0]);
    }

    #[test]
    fn rejects_short_single_segment() {
        assert!(parse_eui48("a0b0").is_err());
    }

    #[test]
    fn rejects_wrong_group_count() {
        assert!(parse_eui48("a0:b0:c0:d0:e0").is_err());
    }

    #[test]
    fn extended_colon_form() {
        let addr = parse_eui64("a0:b0:c0:d0:e0:f0:01:02").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, 0x01, 0x02]);
    }

    #[test]
    fn extended_hyphen_form() {
        let addr = parse_eui64("a0-b0-c0-d0-e0-f0-01-02").unwrap();
        assert_eq!(addr, [0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0, 0x01, 0x02]);
    }
}
