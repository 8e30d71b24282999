//! Display adapters for optional values, tagged unions, durations and FIFO queues
//!
//! Each adapter borrows (or copies) the value it renders and writes it through `core::fmt`; no
//! state is kept between calls. Errors reported by the sink or by an inner value's own
//! implementation are propagated as is.
//!
//! | Shape | Adapter | Output |
//! |-------|---------|--------|
//! | `Option<T>` | [`Optional`] | `{5}` or `{nullopt}` |
//! | tagged union | [`tagged_union!`], [`Union2`] .. [`Union4`] | `{<active alternative>}` |
//! | `Duration` | [`Millis`] | `1900` (whole milliseconds) |
//! | FIFO queue | [`ChunkedFifo`], [`Seq`], [`Slice`] | `[1, 2, 3]` or `[]` |
//!
//! [`Optional`]: struct.Optional.html
//! [`tagged_union!`]: macro.tagged_union.html
//! [`Union2`]: union/enum.Union2.html
//! [`Union4`]: union/enum.Union4.html
//! [`Millis`]: struct.Millis.html
//! [`ChunkedFifo`]: struct.ChunkedFifo.html
//! [`Seq`]: struct.Seq.html
//! [`Slice`]: struct.Slice.html
//!
//! # Examples
//!
//! - Picking the adapter with [`Render`]
//!
//! [`Render`]: trait.Render.html
//!
//! ```
//! use core::time::Duration;
//!
//! use wrapfmt::Render;
//!
//! let timeout = Some(Duration::from_millis(250));
//!
//! // NOTE the inner value is rendered by its own adapter
//! let ms = timeout.map(|d| d.render());
//! assert_eq!(format!("timeout={}", ms.render()), "timeout={250}");
//! ```
//!
//! - Queues
//!
//! ```
//! use wrapfmt::{union::Union2, ChunkedFifo};
//!
//! let mut q: ChunkedFifo<Union2<u16, &str>> = ChunkedFifo::new();
//! q.push_back(Union2::A(80));
//! q.push_back(Union2::B("http"));
//!
//! assert_eq!(q.to_string(), "[{80}, {http}]");
//! ```
//!
//! # Cargo features
//!
//! - `defmt`: implements `defmt::Format` for [`Optional`], [`Millis`] and the ready-made unions,
//! with the same layout as their `Display` implementations.

#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]
#![deny(warnings)]
#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
mod macros;

mod duration;
mod fifo;
mod fmt;
mod optional;
mod render;
mod seq;

pub mod union;

pub use crate::{
    duration::Millis,
    fifo::{ChunkedFifo, IntoIter, Iter},
    fmt::Braced,
    optional::{Optional, NULLOPT},
    render::Render,
    seq::{Seq, Slice},
};
