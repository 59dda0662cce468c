//! The fixed set of phone number renderings.
//!
//! Every valid number is shown in exactly four ways. The order of
//! [`FormatVariant::ALL`] is the order rows are listed, the order the
//! keyboard walks through them, and the first entry is the default selection.

use std::fmt;
use std::str::FromStr;

/// One of the four named renderings of a parsed phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatVariant {
    /// International format, e.g. `+1 585-282-6396`.
    International,
    /// National format, e.g. `(585) 282-6396`.
    National,
    /// E.164 format, e.g. `+15852826396`.
    E164,
    /// National digits grouped with periods, e.g. `585.282.6396`.
    InternationalWithDots,
}

impl FormatVariant {
    /// All variants in display and navigation order.
    pub const ALL: [FormatVariant; 4] = [
        Self::International,
        Self::National,
        Self::E164,
        Self::InternationalWithDots,
    ];

    /// Number of variants in a populated format set.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the stable key used in serialized output.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::International => "international",
            Self::National => "national",
            Self::E164 => "e164",
            Self::InternationalWithDots => "internationalWithDots",
        }
    }

    /// Returns a human-readable label.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::International => "International",
            Self::National => "National",
            Self::E164 => "E.164",
            Self::InternationalWithDots => "Dotted",
        }
    }

    /// Position of this variant in [`FormatVariant::ALL`].
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::International => 0,
            Self::National => 1,
            Self::E164 => 2,
            Self::InternationalWithDots => 3,
        }
    }

    /// Returns the variant at `index`, if any.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error returned when a string does not name a [`FormatVariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown format variant '{}' (expected international, national, e164 or internationalWithDots)",
            self.0
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for FormatVariant {
    type Err = UnknownVariant;

    /// Accepts the serialized key, case-insensitively, plus a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "international" | "intl" => Ok(Self::International),
            "national" => Ok(Self::National),
            "e164" | "e.164" => Ok(Self::E164),
            "internationalwithdots" | "dots" | "dotted" => Ok(Self::InternationalWithDots),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_fixed() {
        assert_eq!(
            FormatVariant::ALL.map(|v| v.key()),
            ["international", "national", "e164", "internationalWithDots"]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (i, variant) in FormatVariant::ALL.iter().enumerate() {
            assert_eq!(variant.index(), i);
            assert_eq!(FormatVariant::from_index(i), Some(*variant));
        }
        assert_eq!(FormatVariant::from_index(4), None);
    }

    #[test]
    fn test_parse_keys_and_aliases() {
        for variant in FormatVariant::ALL {
            assert_eq!(variant.key().parse::<FormatVariant>(), Ok(variant));
        }
        assert_eq!("E.164".parse(), Ok(FormatVariant::E164));
        assert_eq!("dots".parse(), Ok(FormatVariant::InternationalWithDots));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "rfc3966".parse::<FormatVariant>().unwrap_err();
        assert_eq!(err, UnknownVariant("rfc3966".to_string()));
        assert!(err.to_string().contains("rfc3966"));
    }
}
