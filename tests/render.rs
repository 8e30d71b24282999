use std::collections::VecDeque;
use std::fmt::{self, Write};
use std::time::Duration;

use wrapfmt::{tagged_union, union::Union3, ChunkedFifo, Millis, Optional, Render, Seq};

tagged_union! {
    enum Offset {
        Committed(i64),
        Label(String),
    }
}

// no `Debug` implementation
struct Topic(&'static str);

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

tagged_union! {
    enum Target {
        Named(Topic),
        Partition(u32),
    }
}

#[test]
fn optional() {
    assert_eq!(format!("{}", Optional(&Some(5))), "{5}");
    assert_eq!(format!("{}", Optional::<i32>(&None)), "{nullopt}");
}

#[test]
fn union() {
    assert_eq!(Offset::Committed(-1).to_string(), "{-1}");
    assert_eq!(Offset::Label("hwm".to_string()).to_string(), "{hwm}");

    let u: Union3<u8, Millis, &str> = Union3::C("c");
    assert_eq!(u.to_string(), "{c}");
    assert_eq!(u.index(), 2);

    assert_eq!(Target::Named(Topic("orders")).to_string(), "{orders}");
    assert_eq!(Target::Partition(4).to_string(), "{4}");
}

#[test]
fn duration() {
    assert_eq!(Millis(Duration::from_millis(1900)).to_string(), "1900");
    assert_eq!(Millis(Duration::from_micros(500)).to_string(), "0");
    assert_eq!(Duration::new(1, 900_000_000).render().to_string(), "1900");
}

#[test]
fn queue() {
    let q: VecDeque<i32> = VecDeque::new();
    assert_eq!(Seq(&q).to_string(), "[]");

    let q: VecDeque<i32> = vec![1, 2, 3].into();
    assert_eq!(Seq(&q).to_string(), "[1, 2, 3]");

    let mut f: ChunkedFifo<i32, 2> = ChunkedFifo::new();
    assert_eq!(f.to_string(), "[]");
    f.extend(vec![1, 2, 3]);
    assert_eq!(f.to_string(), "[1, 2, 3]");
}

#[test]
fn composed() {
    let mut f: ChunkedFifo<Option<u32>> = ChunkedFifo::new();
    f.push_back(Some(1));
    f.push_back(None);

    let mut out = String::new();
    write!(out, "pending=[").unwrap();
    for (i, x) in f.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        write!(out, "{}", x.render()).unwrap();
    }
    out.push(']');

    assert_eq!(out, "pending=[{1}, {nullopt}]");
}

// an inner renderer that fails
struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn inner_errors_propagate() {
    let mut s = String::new();
    assert!(write!(s, "{}", Optional(&Some(Broken))).is_err());

    let mut s = String::new();
    assert!(write!(s, "{}", Seq(&vec![Broken])).is_err());

    let mut s = String::new();
    assert!(write!(s, "{}", Optional::<Broken>(&None)).is_ok());
    assert_eq!(s, "{nullopt}");
}
