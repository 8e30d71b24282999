//! Formatting helpers

use core::fmt::{self, Write};

/// Wraps a rendering in a single pair of curly braces
///
/// `Display` renders the inner value with its `Display` implementation, `Debug` with its `Debug`
/// implementation.
///
/// ```
/// use wrapfmt::Braced;
///
/// assert_eq!(format!("{}", Braced("hi")), "{hi}");
/// assert_eq!(format!("{:?}", Braced("hi")), "{\"hi\"}");
/// ```
#[derive(Clone, Copy)]
pub struct Braced<T>(pub T);

impl<T> fmt::Display for Braced<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

impl<T> fmt::Debug for Braced<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}}}", self.0)
    }
}

/// Writes `items` as `[a, b, c]`, rendering each item with `item`
pub(crate) fn write_list<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    let mut items = items.into_iter();

    f.write_char('[')?;
    if let Some(first) = items.next() {
        item(f, first)?;

        for next in items {
            f.write_str(", ")?;
            item(f, next)?;
        }
    }
    f.write_char(']')
}
