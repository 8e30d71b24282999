//! Tagged unions
//!
//! Ready-made generic unions of two to four alternatives. Use the [`tagged_union!`] macro to
//! declare unions with named alternatives.
//!
//! [`tagged_union!`]: ../macro.tagged_union.html

tagged_union! {
    /// Exactly one of two alternatives
    #[derive(Clone, Copy, Eq, Hash, PartialEq)]
    pub enum Union2<A, B> {
        /// First alternative
        A(A),
        /// Second alternative
        B(B),
    }
}

tagged_union! {
    /// Exactly one of three alternatives
    #[derive(Clone, Copy, Eq, Hash, PartialEq)]
    pub enum Union3<A, B, C> {
        /// First alternative
        A(A),
        /// Second alternative
        B(B),
        /// Third alternative
        C(C),
    }
}

tagged_union! {
    /// Exactly one of four alternatives
    #[derive(Clone, Copy, Eq, Hash, PartialEq)]
    pub enum Union4<A, B, C, D> {
        /// First alternative
        A(A),
        /// Second alternative
        B(B),
        /// Third alternative
        C(C),
        /// Fourth alternative
        D(D),
    }
}

impl<A, B> Union2<A, B> {
    /// Zero-based index of the active alternative
    pub fn index(&self) -> usize {
        match self {
            Union2::A(_) => 0,
            Union2::B(_) => 1,
        }
    }
}

impl<A, B, C> Union3<A, B, C> {
    /// Zero-based index of the active alternative
    pub fn index(&self) -> usize {
        match self {
            Union3::A(_) => 0,
            Union3::B(_) => 1,
            Union3::C(_) => 2,
        }
    }
}

impl<A, B, C, D> Union4<A, B, C, D> {
    /// Zero-based index of the active alternative
    pub fn index(&self) -> usize {
        match self {
            Union4::A(_) => 0,
            Union4::B(_) => 1,
            Union4::C(_) => 2,
            Union4::D(_) => 3,
        }
    }
}

#[cfg(feature = "defmt")]
macro_rules! format_union {
    ($Union:ident<$($T:ident),+>) => {
        impl<$($T),+> defmt::Format for $Union<$($T),+>
        where
            $($T: defmt::Format,)+
        {
            fn format(&self, fmt: defmt::Formatter<'_>) {
                match self {
                    $(
                        $Union::$T(x) => defmt::write!(fmt, "{{{}}}", x),
                    )+
                }
            }
        }
    };
}

#[cfg(feature = "defmt")]
format_union!(Union2<A, B>);
#[cfg(feature = "defmt")]
format_union!(Union3<A, B, C>);
#[cfg(feature = "defmt")]
format_union!(Union4<A, B, C, D>);

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};
    use core::time::Duration;

    use super::{Union2, Union3, Union4};
    use crate::Millis;

    tagged_union! {
        enum Token {
            Word(&'static str),
            Number(u32),
            Elapsed(Millis),
        }
    }

    #[test]
    fn active_alternative() {
        let u: Union2<i32, &str> = Union2::A(5);
        assert_eq!(u.to_string(), "{5}");

        let u: Union2<i32, &str> = Union2::B("five");
        assert_eq!(u.to_string(), "{five}");

        let u: Union3<u8, char, bool> = Union3::C(false);
        assert_eq!(u.to_string(), "{false}");

        let u: Union4<u8, u8, u8, u8> = Union4::D(4);
        assert_eq!(u.to_string(), "{4}");
    }

    #[test]
    fn debug() {
        let u: Union2<i32, &str> = Union2::B("x");
        assert_eq!(format!("{:?}", u), "{\"x\"}");

        let u: Union3<u8, char, bool> = Union3::B('c');
        assert_eq!(format!("{:?}", u), "{'c'}");
    }

    #[test]
    fn index() {
        assert_eq!(Union2::<u8, u8>::B(0).index(), 1);
        assert_eq!(Union3::<u8, u8, u8>::A(0).index(), 0);
        assert_eq!(Union4::<u8, u8, u8, u8>::C(0).index(), 2);
    }

    #[test]
    fn named_alternatives() {
        assert_eq!(Token::Word("go").to_string(), "{go}");
        assert_eq!(Token::Number(42).to_string(), "{42}");
        assert_eq!(
            Token::Elapsed(Millis(Duration::from_millis(1900))).to_string(),
            "{1900}"
        );
    }

    // renders with `Display` only
    struct Topic(&'static str);

    impl core::fmt::Display for Topic {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "topic:{}", self.0)
        }
    }

    // renders with `Debug` only
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Raw(u8);

    tagged_union! {
        enum Target {
            Named(Topic),
            Id(u32),
        }
    }

    tagged_union! {
        enum Dump {
            Bytes(Raw),
            Len(usize),
        }
    }

    #[test]
    fn alternatives_need_only_the_used_trait() {
        assert_eq!(Target::Named(Topic("orders")).to_string(), "{topic:orders}");
        assert_eq!(Target::Id(3).to_string(), "{3}");

        assert_eq!(format!("{:?}", Dump::Bytes(Raw(1))), "{Raw(1)}");
        assert_eq!(format!("{:?}", Dump::Len(2)), "{2}");
    }

    #[test]
    fn nested_unions() {
        let u: Union2<Union2<u8, u8>, u8> = Union2::A(Union2::B(3));
        assert_eq!(u.to_string(), "{{3}}");
    }
}
