//! The phone number parsing collaborator.
//!
//! The formatter never looks inside a phone number itself. It asks a
//! [`PhoneParser`] to parse the raw text under a fixed [`Region`], then reads
//! three renderings and a validity flag off the result through
//! [`PhoneRenderings`]. [`LibPhoneNumber`] is the default implementation,
//! backed by the `phonenumber` crate (a port of Google's libphonenumber).
//!
//! # Example
//!
//! ```
//! use phone_formatter::parser::{LibPhoneNumber, PhoneParser, PhoneRenderings, Region};
//!
//! let number = LibPhoneNumber.parse("5852826396", Region::Us).unwrap();
//! assert!(number.is_valid());
//! assert_eq!(number.e164(), "+15852826396");
//!
//! assert!(LibPhoneNumber.parse("abc", Region::Us).is_err());
//! ```

use crate::error::ParseRejection;
use phonenumber::{country, Mode, PhoneNumber};

/// Region assumed when the input carries no country code of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Region {
    /// United States (`+1`).
    #[default]
    Us,
}

impl Region {
    /// ISO 3166-1 alpha-2 code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Us => "US",
        }
    }

    fn country_id(self) -> country::Id {
        match self {
            Self::Us => country::Id::US,
        }
    }
}

/// Renderings a parsed number must be able to produce.
pub trait PhoneRenderings {
    /// Whether the number is a real, dialable number for its region.
    fn is_valid(&self) -> bool;

    /// International rendering, e.g. `+1 585-282-6396`.
    fn international(&self) -> String;

    /// National rendering, e.g. `(585) 282-6396`.
    fn national(&self) -> String;

    /// E.164 rendering, e.g. `+15852826396`.
    fn e164(&self) -> String;
}

/// Turns raw text into a parsed number, or rejects it.
pub trait PhoneParser {
    /// The parsed number type.
    type Number: PhoneRenderings;

    /// Parses `raw` assuming `region` for numbers without a country code.
    fn parse(&self, raw: &str, region: Region) -> Result<Self::Number, ParseRejection>;
}

impl<P: PhoneParser + ?Sized> PhoneParser for &P {
    type Number = P::Number;

    fn parse(&self, raw: &str, region: Region) -> Result<Self::Number, ParseRejection> {
        (**self).parse(raw, region)
    }
}

/// Parser backed by the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl PhoneParser for LibPhoneNumber {
    type Number = PhoneNumber;

    fn parse(&self, raw: &str, region: Region) -> Result<PhoneNumber, ParseRejection> {
        if raw.trim().is_empty() {
            return Err(ParseRejection::Empty);
        }

        phonenumber::parse(Some(region.country_id()), raw).map_err(|e| {
            ParseRejection::Unparseable {
                reason: e.to_string(),
            }
        })
    }
}

impl PhoneRenderings for PhoneNumber {
    fn is_valid(&self) -> bool {
        phonenumber::is_valid(self)
    }

    fn international(&self) -> String {
        self.format().mode(Mode::International).to_string()
    }

    fn national(&self) -> String {
        self.format().mode(Mode::National).to_string()
    }

    fn e164(&self) -> String {
        self.format().mode(Mode::E164).to_string()
    }
}
