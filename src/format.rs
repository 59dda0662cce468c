//! Deriving every rendering of a phone number from raw input.
//!
//! [`format`] is a pure function: the same input always yields the same
//! [`FormatSet`], and malformed input is not an error but the empty set.
//!
//! # Format Conventions
//!
//! - **international**: `+1 585-282-6396`
//! - **national**: `(585) 282-6396`
//! - **e164**: `+15852826396`
//! - **internationalWithDots**: `585.282.6396` (national digits, grouped 3-3-4)
//!
//! # Example
//!
//! ```
//! use phone_formatter::format::format;
//! use phone_formatter::FormatVariant;
//!
//! let formats = format("5852826396");
//! assert_eq!(formats.len(), 4);
//! assert_eq!(formats.get(FormatVariant::E164), Some("+15852826396"));
//! assert_eq!(formats.get(FormatVariant::InternationalWithDots), Some("585.282.6396"));
//!
//! assert!(format("abc").is_empty());
//! ```

use crate::parser::{LibPhoneNumber, PhoneParser, PhoneRenderings, Region};
use crate::FormatVariant;

/// Number of digits in a US national number without extension.
pub const NATIONAL_DIGITS: usize = 10;

/// The renderings of one phone number, in [`FormatVariant::ALL`] order.
///
/// Either empty, or holding all four variants with non-empty values. There
/// is no way to build a partially filled set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSet {
    values: Option<[String; FormatVariant::COUNT]>,
}

impl FormatSet {
    /// The set shown when the input is not a valid number.
    #[inline]
    pub const fn empty() -> Self {
        Self { values: None }
    }

    /// Builds a populated set, or the empty set if any value is empty.
    fn populated(values: [String; FormatVariant::COUNT]) -> Self {
        if values.iter().any(|v| v.is_empty()) {
            return Self::empty();
        }
        Self {
            values: Some(values),
        }
    }

    /// Returns true if no renderings are available.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_none()
    }

    /// Number of renderings: 0 or 4.
    #[inline]
    pub fn len(&self) -> usize {
        if self.values.is_some() {
            FormatVariant::COUNT
        } else {
            0
        }
    }

    /// Looks up a rendering by variant.
    #[inline]
    pub fn get(&self, variant: FormatVariant) -> Option<&str> {
        self.value_at(variant.index())
    }

    /// Looks up a rendering by its position in the list.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.as_ref()?.get(index).map(String::as_str)
    }

    /// Looks up the variant and rendering at a position in the list.
    pub fn entry_at(&self, index: usize) -> Option<(FormatVariant, &str)> {
        Some((FormatVariant::from_index(index)?, self.value_at(index)?))
    }

    /// Iterates over `(variant, rendering)` pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (FormatVariant, &str)> + '_ {
        self.values
            .iter()
            .flat_map(|values| FormatVariant::ALL.into_iter().zip(values.iter()))
            .map(|(variant, value)| (variant, value.as_str()))
    }

    /// Iterates over renderings in list order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormatSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (variant, value) in self.iter() {
            map.serialize_entry(variant.key(), value)?;
        }
        map.end()
    }
}

/// Formats a phone number every supported way, assuming a US number.
///
/// Returns the empty set if the input is not a valid US number.
///
/// # Example
///
/// ```
/// use phone_formatter::format::format;
///
/// let formats = format("+1 (585) 282-6396");
/// assert_eq!(formats.value_at(2), Some("+15852826396"));
/// ```
pub fn format(raw: &str) -> FormatSet {
    format_with(&LibPhoneNumber, raw)
}

/// Formats a phone number every supported way using a specific parser.
pub fn format_with<P: PhoneParser + ?Sized>(parser: &P, raw: &str) -> FormatSet {
    let number = match parser.parse(raw, Region::Us) {
        Ok(number) => number,
        Err(rejection) => {
            tracing::trace!(%rejection, "input rejected by parser");
            return FormatSet::empty();
        }
    };

    if !number.is_valid() {
        tracing::trace!("parsed number is not a valid US number");
        return FormatSet::empty();
    }

    let national = number.national();
    let digits = strip_formatting(&national);
    // Extensions and other oddities leave more than ten digits; keep them ungrouped.
    let dotted = group_with_dots(&digits).unwrap_or(digits);

    FormatSet::populated([number.international(), national, number.e164(), dotted])
}

/// Strips everything except ASCII digits.
///
/// # Example
///
/// ```
/// use phone_formatter::format::strip_formatting;
///
/// assert_eq!(strip_formatting("(585) 282-6396"), "5852826396");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups exactly ten digits as `DDD.DDD.DDDD`.
///
/// Returns `None` for any other input, including ten digits mixed with
/// other characters.
///
/// # Example
///
/// ```
/// use phone_formatter::format::group_with_dots;
///
/// assert_eq!(group_with_dots("5852826396"), Some("585.282.6396".to_string()));
/// assert_eq!(group_with_dots("58528263961"), None);
/// ```
pub fn group_with_dots(digits: &str) -> Option<String> {
    if digits.len() != NATIONAL_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]))
}
