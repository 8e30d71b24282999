/// Declares an enum whose variants each hold exactly one value and registers its rendering
///
/// `Display` writes the active alternative as `{<alternative>}` using the alternative's own
/// `Display` implementation; `Debug` does the same with `Debug`. An enum without variants is
/// rejected by the macro.
///
/// ```
/// wrapfmt::tagged_union! {
///     /// A configuration value
///     #[derive(Clone, Copy)]
///     pub enum Value {
///         /// Integer
///         Int(i64),
///         /// Flag
///         Flag(bool),
///     }
/// }
///
/// assert_eq!(format!("{}", Value::Int(-3)), "{-3}");
/// assert_eq!(format!("{}", Value::Flag(true)), "{true}");
/// ```
///
/// Type parameters are supported:
///
/// ```
/// wrapfmt::tagged_union! {
///     enum Either<L, R> {
///         Left(L),
///         Right(R),
///     }
/// }
///
/// let e: Either<u8, &str> = Either::Right("ok");
/// assert_eq!(format!("{}", e), "{ok}");
/// assert_eq!(format!("{:?}", e), "{\"ok\"}");
/// ```
///
/// An alternative only needs to implement the trait that is actually used; `Debug` is not
/// required to render with `Display`:
///
/// ```
/// use core::fmt;
///
/// struct Topic(&'static str);
///
/// impl fmt::Display for Topic {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "topic:{}", self.0)
///     }
/// }
///
/// wrapfmt::tagged_union! {
///     enum Target {
///         Named(Topic),
///         Id(u32),
///     }
/// }
///
/// assert_eq!(format!("{}", Target::Named(Topic("orders"))), "{topic:orders}");
/// assert_eq!(format!("{}", Target::Id(7)), "{7}");
/// ```
///
/// A union needs at least one alternative:
///
/// ```compile_fail
/// wrapfmt::tagged_union! {
///     enum Empty {}
/// }
/// ```
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$enum_attr:meta])*
        $vis:vis enum $Enum:ident $(<$($T:ident),+ $(,)?>)? {
            $(
                $(#[$variant_attr:meta])*
                $Variant:ident($Ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_attr])*
        $vis enum $Enum $(<$($T),+>)? {
            $(
                $(#[$variant_attr])*
                $Variant($Ty),
            )+
        }

        impl $(<$($T),+>)? ::core::fmt::Display for $Enum $(<$($T),+>)?
        where
            $(for<'__x> $Ty: ::core::fmt::Display,)+
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(
                        $Enum::$Variant(x) => ::core::fmt::Display::fmt(&$crate::Braced(x), f),
                    )+
                }
            }
        }

        impl $(<$($T),+>)? ::core::fmt::Debug for $Enum $(<$($T),+>)?
        where
            $(for<'__x> $Ty: ::core::fmt::Debug,)+
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(
                        $Enum::$Variant(x) => ::core::fmt::Debug::fmt(&$crate::Braced(x), f),
                    )+
                }
            }
        }
    };
}
