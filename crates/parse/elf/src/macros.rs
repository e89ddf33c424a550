//! Declarative helper for closed ELF enumerations.

/// Defines an enum over a closed set of raw ELF values.
///
/// Every listed value maps to its own variant; anything else becomes
/// `Unrecognized(raw)` so the raw number survives classification.
/// The generated type provides `from_raw`, `raw`, `description`, and a
/// `Display` impl that prints the description or `unknown (0x..)`.
macro_rules! elf_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $raw:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $desc:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value outside the known set, kept verbatim.
            Unrecognized($raw),
        }

        impl $name {
            /// Classifies a raw field value.
            #[must_use]
            pub const fn from_raw(raw: $raw) -> Self {
                match raw {
                    $($value => Self::$variant,)*
                    other => Self::Unrecognized(other),
                }
            }

            /// Returns the raw field value.
            #[must_use]
            pub const fn raw(self) -> $raw {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unrecognized(other) => other,
                }
            }

            /// Returns the human-readable meaning, or `None` if unrecognized.
            #[must_use]
            pub const fn description(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($desc),)*
                    Self::Unrecognized(_) => None,
                }
            }

            /// Returns `true` unless the value is [`Self::Unrecognized`].
            #[must_use]
            pub const fn is_recognized(self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<$raw> for $name {
            fn from(raw: $raw) -> Self {
                Self::from_raw(raw)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.description() {
                    Some(desc) => f.write_str(desc),
                    None => write!(f, "unknown ({:#x})", self.raw()),
                }
            }
        }
    };
}

pub(crate) use elf_enum;
