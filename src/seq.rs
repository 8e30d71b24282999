//! Ordered containers
//!
//! Renders any container that can be iterated by reference as `[a, b, c]`.

use core::fmt;

use as_slice::AsSlice;

use crate::fmt::write_list;

/// Renders a borrowed container as a bracketed, comma separated list
///
/// ```
/// use std::collections::VecDeque;
///
/// use wrapfmt::Seq;
///
/// let mut q = VecDeque::<i32>::new();
/// assert_eq!(format!("{}", Seq(&q)), "[]");
///
/// q.extend(&[1, 2, 3]);
/// assert_eq!(format!("{}", Seq(&q)), "[1, 2, 3]");
/// ```
pub struct Seq<'a, C>(pub &'a C)
where
    C: ?Sized;

impl<'a, C> Clone for Seq<'a, C>
where
    C: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for Seq<'a, C> where C: ?Sized {}

impl<'a, C> fmt::Display for Seq<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0, |f, item| fmt::Display::fmt(&item, f))
    }
}

impl<'a, C> fmt::Debug for Seq<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0, |f, item| fmt::Debug::fmt(&item, f))
    }
}

/// Renders a buffer as a bracketed, comma separated list of its elements
///
/// ```
/// use wrapfmt::Slice;
///
/// assert_eq!(format!("{}", Slice(&[0xde, 0xad][..])), "[222, 173]");
/// assert_eq!(format!("{:?}", Slice(&["a"][..])), "[\"a\"]");
/// ```
#[derive(Clone, Copy)]
pub struct Slice<S>(pub S);

impl<S> fmt::Display for Slice<S>
where
    S: AsSlice,
    S::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0.as_slice(), |f, item| fmt::Display::fmt(item, f))
    }
}

impl<S> fmt::Debug for Slice<S>
where
    S: AsSlice,
    S::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0.as_slice(), |f, item| fmt::Debug::fmt(item, f))
    }
}
