use core::fmt;

/// The octets of one encoded code point.
///
/// Each variant holds exactly as many octets as the sequence is long, so
/// there are no unused trailing bytes to misread. [`EncodingUnit::Invalid`]
/// is what [`encode`](crate::encode) returns for a value with no encoding; it
/// carries no octets at all.
///
/// A unit built with [`EncodingUnit::from_bytes`] is not checked. Run it
/// through [`validate`](crate::validate) or [`decode`](crate::decode) before
/// trusting its contents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodingUnit {
    /// No encoding.
    #[default]
    Invalid,
    /// `0xxxxxxx`
    One([u8; 1]),
    /// `110xxxxx 10xxxxxx`
    Two([u8; 2]),
    /// `1110xxxx 10xxxxxx 10xxxxxx`
    Three([u8; 3]),
    /// `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx`
    Four([u8; 4]),
}

#[allow(clippy::len_without_is_empty)]
impl EncodingUnit {
    /// Wraps one to four octets as a candidate unit without checking them.
    ///
    /// Any other slice length gives [`EncodingUnit::Invalid`].
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        match *bytes {
            [a] => Self::One([a]),
            [a, b] => Self::Two([a, b]),
            [a, b, c] => Self::Three([a, b, c]),
            [a, b, c, d] => Self::Four([a, b, c, d]),
            _ => Self::Invalid,
        }
    }

    /// Number of octets; `0` for [`EncodingUnit::Invalid`].
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Invalid => 0,
            Self::One(_) => 1,
            Self::Two(_) => 2,
            Self::Three(_) => 3,
            Self::Four(_) => 4,
        }
    }

    /// Whether this is the [`EncodingUnit::Invalid`] marker.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// The octets, exactly [`len`](Self::len) of them.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Invalid => &[],
            Self::One(b) => b,
            Self::Two(b) => b,
            Self::Three(b) => b,
            Self::Four(b) => b,
        }
    }

    /// The leading octet, if any.
    #[must_use]
    pub const fn first_octet(&self) -> Option<u8> {
        match self.as_bytes() {
            [first, ..] => Some(*first),
            [] => None,
        }
    }
}

impl AsRef<[u8]> for EncodingUnit {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<char> for EncodingUnit {
    fn from(c: char) -> Self {
        crate::encode_char(c)
    }
}

impl fmt::Debug for EncodingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => return f.write_str("Invalid"),
            Self::One(_) => "One",
            Self::Two(_) => "Two",
            Self::Three(_) => "Three",
            Self::Four(_) => "Four",
        };
        write!(f, "{name}({:02X?})", self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn from_bytes_picks_variant_by_length() {
        assert_eq!(EncodingUnit::from_bytes(&[]), EncodingUnit::Invalid);
        assert_eq!(EncodingUnit::from_bytes(&[0x41]), EncodingUnit::One([0x41]));
        assert_eq!(
            EncodingUnit::from_bytes(&[0xE2, 0x82, 0xAC]),
            EncodingUnit::Three([0xE2, 0x82, 0xAC])
        );
        assert_eq!(
            EncodingUnit::from_bytes(&[0xF0, 0x90, 0x80, 0x80, 0x80]),
            EncodingUnit::Invalid
        );
    }

    #[test]
    fn invalid_has_no_octets() {
        let unit = EncodingUnit::default();
        assert!(unit.is_invalid());
        assert_eq!(unit.len(), 0);
        assert!(unit.as_bytes().is_empty());
        assert_eq!(unit.first_octet(), None);
    }

    #[test]
    fn accessors_match_contents() {
        let unit = EncodingUnit::Two([0xC3, 0xA9]);
        assert_eq!(unit.len(), 2);
        assert_eq!(unit.as_ref(), &[0xC3, 0xA9]);
        assert_eq!(unit.first_octet(), Some(0xC3));
        assert!(!unit.is_invalid());
    }

    #[test]
    fn debug_shows_hex_octets() {
        assert_eq!(
            format!("{:?}", EncodingUnit::Three([0xE2, 0x82, 0xAC])),
            "Three([E2, 82, AC])"
        );
        assert_eq!(format!("{:?}", EncodingUnit::Invalid), "Invalid");
    }
}
