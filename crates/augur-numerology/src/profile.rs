//! Numerology input: names and a birth date.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The subset of a user profile that numerology reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Full name given at birth.
    pub given_name: String,
    /// Name currently in use.
    pub current_name: String,
    /// Mother's maiden name.
    pub mothers_maiden_name: String,
    /// Birth date as `YYYY-MM-DD`.
    pub birth_date: String,
}

impl UserProfile {
    /// A profile with only a given name and birth date.
    pub fn new(given_name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    /// Set the current name.
    pub fn with_current_name(mut self, name: impl Into<String>) -> Self {
        self.current_name = name.into();
        self
    }

    /// Set the mother's maiden name.
    pub fn with_mothers_maiden_name(mut self, name: impl Into<String>) -> Self {
        self.mothers_maiden_name = name.into();
        self
    }

    /// The parsed birth date, if usable.
    pub fn birth(&self) -> Option<BirthDate> {
        BirthDate::parse(&self.birth_date)
    }

    /// The day of birth on its own, see [`BirthDate::parse_day`].
    pub fn birth_day(&self) -> Option<u32> {
        BirthDate::parse_day(&self.birth_date)
    }
}

/// A birth date split into its numeric parts.
///
/// Parts are not checked against the calendar: numerology only needs the
/// digits, so `1990-13-40` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    /// Year.
    pub year: u32,
    /// Month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl BirthDate {
    /// Parse `YYYY-MM-DD`. Parts past the third are ignored.
    ///
    /// Returns `None` if any of the three parts is missing, non-numeric,
    /// or zero.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-').map(|p| p.trim().parse::<u32>().ok());
        let year = parts.next().flatten()?;
        let month = parts.next().flatten()?;
        let day = parts.next().flatten()?;
        if year == 0 || month == 0 || day == 0 {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Read only the day: the leading digits of the third `-` part.
    ///
    /// More forgiving than [`parse`](Self::parse), so `1990-05-15T00:00`
    /// still has day 15 even though it is not a usable date.
    pub fn parse_day(s: &str) -> Option<u32> {
        let part = s.split('-').nth(2)?.trim_start();
        let end = part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(part.len());
        part[..end].parse::<u32>().ok().filter(|day| *day != 0)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso_date() {
        assert_eq!(
            BirthDate::parse("1990-05-15"),
            Some(BirthDate {
                year: 1990,
                month: 5,
                day: 15
            })
        );
    }

    #[test]
    fn parse_rejects_unusable_dates() {
        for input in ["", "1990", "1990-05", "1990-00-15", "0-5-15", "1990-xx-15", "-5-15"] {
            assert_eq!(BirthDate::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn parse_is_lenient() {
        let date = BirthDate::parse("1990-13-40T00:00").map(|d| (d.month, d.day));
        assert_eq!(date, None);
        let date = BirthDate::parse("1990-13-40-extra").map(|d| (d.month, d.day));
        assert_eq!(date, Some((13, 40)));
    }

    #[test]
    fn day_reads_leading_digits() {
        assert_eq!(BirthDate::parse_day("1990-05-15"), Some(15));
        assert_eq!(BirthDate::parse_day("1990-05-15T00:00"), Some(15));
        assert_eq!(BirthDate::parse_day("x-y- 7th"), Some(7));
        for input in ["", "1990-05", "1990-05-", "1990-05-T1", "1990-05-00"] {
            assert_eq!(BirthDate::parse_day(input), None, "{input:?}");
        }
    }

    #[test]
    fn display_pads() {
        let date = BirthDate::parse("800-1-2").unwrap();
        assert_eq!(date.to_string(), "0800-01-02");
    }

    #[test]
    fn builder() {
        let profile = UserProfile::new("Ada Lovelace", "1815-12-10")
            .with_current_name("Ada King")
            .with_mothers_maiden_name("Milbanke");
        assert_eq!(profile.current_name, "Ada King");
        assert_eq!(profile.mothers_maiden_name, "Milbanke");
        assert_eq!(profile.birth().map(|d| d.year), Some(1815));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"givenName":"Ada","birthDate":"1990-05-15"}"#).unwrap();
        assert_eq!(profile.given_name, "Ada");
        assert!(profile.current_name.is_empty());
    }
}
