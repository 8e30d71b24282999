//! Adapter lookup by shape
//!
//! [`Render`] picks the adapter for a value so call sites don't have to name it.
//!
//! [`Render`]: trait.Render.html

use alloc::{collections::VecDeque, vec::Vec};
use core::time::Duration;

use crate::{ChunkedFifo, Millis, Optional, Seq};

/// Types with a registered rendering
///
/// ```
/// use std::collections::VecDeque;
/// use std::time::Duration;
///
/// use wrapfmt::Render;
///
/// assert_eq!(format!("{}", Some(5).render()), "{5}");
/// assert_eq!(format!("{}", None::<i32>.render()), "{nullopt}");
/// assert_eq!(format!("{}", Duration::from_millis(1900).render()), "1900");
///
/// let q: VecDeque<_> = (1..4).collect();
/// assert_eq!(format!("{}", q.render()), "[1, 2, 3]");
/// ```
pub trait Render<'a> {
    /// Adapter that implements `Display` / `Debug` for `Self`
    type Adapter;

    /// Returns the adapter that renders `self`
    fn render(&'a self) -> Self::Adapter;
}

impl<'a, T> Render<'a> for Option<T>
where
    T: 'a,
{
    type Adapter = Optional<'a, T>;

    fn render(&'a self) -> Optional<'a, T> {
        Optional(self)
    }
}

impl<'a> Render<'a> for Duration {
    type Adapter = Millis;

    fn render(&'a self) -> Millis {
        Millis(*self)
    }
}

impl<'a, T> Render<'a> for VecDeque<T>
where
    T: 'a,
{
    type Adapter = Seq<'a, VecDeque<T>>;

    fn render(&'a self) -> Self::Adapter {
        Seq(self)
    }
}

impl<'a, T> Render<'a> for Vec<T>
where
    T: 'a,
{
    type Adapter = Seq<'a, Vec<T>>;

    fn render(&'a self) -> Self::Adapter {
        Seq(self)
    }
}

impl<'a, T> Render<'a> for [T]
where
    T: 'a,
{
    type Adapter = Seq<'a, [T]>;

    fn render(&'a self) -> Self::Adapter {
        Seq(self)
    }
}

impl<'a, T, const N: usize> Render<'a> for ChunkedFifo<T, N>
where
    T: 'a,
{
    type Adapter = Seq<'a, ChunkedFifo<T, N>>;

    fn render(&'a self) -> Self::Adapter {
        Seq(self)
    }
}
