//! Durations

use core::fmt;
use core::time::Duration;

/// Renders a `Duration` as its whole number of milliseconds
///
/// Sub-millisecond remainders are truncated. No unit suffix is written.
///
/// ```
/// use core::time::Duration;
///
/// use wrapfmt::Millis;
///
/// assert_eq!(format!("{}", Millis(Duration::from_millis(1900))), "1900");
/// assert_eq!(format!("{}", Millis(Duration::from_micros(500))), "0");
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Millis(pub Duration);

impl Millis {
    /// Whole milliseconds contained in the duration
    pub fn get(&self) -> u128 {
        self.0.as_millis()
    }
}

impl From<Duration> for Millis {
    fn from(d: Duration) -> Millis {
        Millis(d)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Debug for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Millis {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(fmt, "{=u128}", self.get())
    }
}
