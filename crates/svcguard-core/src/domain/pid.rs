//! Operating-system process identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A process id that can be handed to `kill(2)`.
///
/// Always strictly positive and no larger than `i32::MAX`, so `0` (the
/// caller's process group) and negative values (whole groups) can never be
/// signalled by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Pid(u32);

/// Error returned when PID file content is not a usable process id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PidParseError {
    #[error("PID is empty")]
    Empty,

    #[error("PID '{0}' is not a decimal number")]
    NotANumber(String),

    #[error("PID {0} is out of range")]
    OutOfRange(u64),
}

impl Pid {
    /// Largest id a POSIX `pid_t` can address.
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    /// Wrap a raw id, rejecting `0` and anything above [`Pid::MAX`].
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        if raw == 0 || raw > Self::MAX {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The id of the calling process.
    #[must_use]
    pub fn current() -> Self {
        Self(std::process::id())
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The id as a signed `pid_t` value.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // bounded by Pid::MAX
    pub const fn as_raw(self) -> i32 {
        self.0 as i32
    }
}

impl FromStr for Pid {
    type Err = PidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PidParseError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PidParseError::NotANumber(trimmed.to_string()));
        }

        let raw: u64 = trimmed
            .parse()
            .map_err(|_| PidParseError::NotANumber(trimmed.to_string()))?;
        u32::try_from(raw)
            .ok()
            .and_then(Self::new)
            .ok_or(PidParseError::OutOfRange(raw))
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_ids() {
        assert_eq!("4242".parse::<Pid>().unwrap().as_u32(), 4242);
        assert_eq!(" 17\n".parse::<Pid>().unwrap().as_u32(), 17);
    }

    #[test]
    fn rejects_zero_and_out_of_range() {
        assert_eq!("0".parse::<Pid>(), Err(PidParseError::OutOfRange(0)));
        assert!(matches!(
            "2147483648".parse::<Pid>(),
            Err(PidParseError::OutOfRange(2_147_483_648))
        ));
        assert!(matches!(
            "99999999999999999999999".parse::<Pid>(),
            Err(PidParseError::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Pid>(), Err(PidParseError::Empty));
        assert!(matches!("-5".parse::<Pid>(), Err(PidParseError::NotANumber(_))));
        assert!(matches!("12abc".parse::<Pid>(), Err(PidParseError::NotANumber(_))));
        assert!(matches!("1\n2".parse::<Pid>(), Err(PidParseError::NotANumber(_))));
    }

    #[test]
    fn current_pid_is_valid() {
        let pid = Pid::current();
        assert_eq!(Pid::new(pid.as_u32()), Some(pid));
        assert_eq!(i64::from(pid.as_raw()), i64::from(pid.as_u32()));
    }
}
