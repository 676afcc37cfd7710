//! Display unit for elapsed-time presentation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Granularity used when presenting elapsed time.
///
/// Declaration order is the cycle order of the unit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    #[default]
    Years,
}

impl DisplayUnit {
    /// All units in cycle order.
    pub const ALL: [DisplayUnit; 6] = [
        DisplayUnit::Seconds,
        DisplayUnit::Minutes,
        DisplayUnit::Hours,
        DisplayUnit::Days,
        DisplayUnit::Months,
        DisplayUnit::Years,
    ];

    /// Returns the following unit, wrapping from `Years` back to `Seconds`.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|unit| *unit == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Short label appended to the elapsed value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Years => "年",
            Self::Months => "月",
            Self::Days => "日",
            Self::Hours => "時",
            Self::Minutes => "分",
            Self::Seconds => "秒",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl Display for DisplayUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnitError(pub String);

impl Display for UnknownUnitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown display unit `{}`; expected seconds|minutes|hours|days|months|years",
            self.0
        )
    }
}

impl std::error::Error for UnknownUnitError {}

impl FromStr for DisplayUnit {
    type Err = UnknownUnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == normalized)
            .ok_or(UnknownUnitError(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayUnit;

    #[test]
    fn next_wraps_after_years() {
        assert_eq!(DisplayUnit::Years.next(), DisplayUnit::Seconds);
        assert_eq!(DisplayUnit::Seconds.next(), DisplayUnit::Minutes);
    }

    #[test]
    fn parses_case_insensitive_names() {
        assert_eq!(" Days ".parse::<DisplayUnit>().unwrap(), DisplayUnit::Days);
        assert!("weeks".parse::<DisplayUnit>().is_err());
    }
}
