//! Declarative helpers for closed token enums

/// Declare a closed token enum with a stable snake_case name per variant.
///
/// Generates the enum (with the usual `Copy`/`Hash`/`Eq` derives), an `ALL`
/// slice in declaration order, `as_str()`, `from_name()` and `Display`.
///
/// ```rust
/// fluent_theme::token_keys! {
///     /// Layout density
///     pub enum Density {
///         Compact => "compact",
///         Comfortable => "comfortable",
///     }
/// }
///
/// assert_eq!(Density::ALL.len(), 2);
/// assert_eq!(Density::from_name("compact"), Some(Density::Compact));
/// assert_eq!(Density::Comfortable.to_string(), "comfortable");
/// ```
#[macro_export]
macro_rules! token_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Stable identifier used in theme files
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|key| key.as_str() == name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
