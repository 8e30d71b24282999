//! Optional values
//!
//! A present value renders as `{<value>}`, an absent one as `{nullopt}`.

use core::fmt;

use crate::fmt::Braced;

/// Renders an `Option` as `{<value>}` or `{nullopt}`
///
/// ```
/// use wrapfmt::Optional;
///
/// assert_eq!(format!("{}", Optional(&Some(5))), "{5}");
/// assert_eq!(format!("{}", Optional::<i32>(&None)), "{nullopt}");
/// ```
pub struct Optional<'a, T>(pub &'a Option<T>);

/// Text written for an absent value
pub const NULLOPT: &str = "{nullopt}";

impl<'a, T> Clone for Optional<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Optional<'a, T> {}

impl<'a, T> fmt::Display for Optional<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(&Braced(value), f),
            None => f.write_str(NULLOPT),
        }
    }
}

impl<'a, T> fmt::Debug for Optional<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(&Braced(value), f),
            None => f.write_str(NULLOPT),
        }
    }
}

#[cfg(feature = "defmt")]
impl<'a, T> defmt::Format for Optional<'a, T>
where
    T: defmt::Format,
{
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self.0 {
            Some(value) => defmt::write!(fmt, "{{{}}}", value),
            None => defmt::write!(fmt, "{{nullopt}}"),
        }
    }
}
