//! Macros making implementing the mnemonic types easier.

/// Creates a closed enum of well-known values with their mnemonics.
///
/// Each variant is given as `(Variant => value, "MNEMONIC")`, optionally
/// followed by further alternative spellings that are accepted when
/// parsing but never produced when displaying.
///
/// This adds the methods `from_int`, `to_int`, `from_mnemonic`, and
/// `to_mnemonic` as well as impls for `FromStr`, `Display`, and, if the
/// `serde` feature is enabled, `Serialize` and `Deserialize` using the
/// mnemonic.
///
/// The module invoking the macro gets its own `FromStrError` type.
macro_rules! mnemonic_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ty, $error:expr;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
            $value:literal, $mnemonic:literal $(, $alias:literal)* ) )* ) => {
        $(#[$attr])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $ianatype {
            $(
                $(#[$variant_attr])*
                $variant
            ),*
        }

        impl $ianatype {
            /// All values in the order of their definition.
            pub const ALL: &'static [$ianatype] = &[
                $( $ianatype::$variant ),*
            ];

            /// Returns the value for a raw integer value if it is known.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Option<Self> {
                match value {
                    $( $value => Some($ianatype::$variant), )*
                    _ => None,
                }
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                match self {
                    $( $ianatype::$variant => $value ),*
                }
            }

            /// Returns a value from a mnemonic, ignoring ASCII case.
            #[must_use]
            pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic.as_bytes())
                        $( || m.eq_ignore_ascii_case($alias.as_bytes()) )*
                    {
                        return Some($ianatype::$variant)
                    }
                )*
                None
            }

            /// Returns the canonical mnemonic for this value.
            #[must_use]
            pub const fn to_mnemonic(self) -> &'static str {
                match self {
                    $( $ianatype::$variant => $mnemonic ),*
                }
            }
        }

        //--- FromStr and Display

        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // All mnemonics are ASCII, so comparing bytes is fine.
                $ianatype::from_mnemonic(s.as_bytes()).ok_or(FromStrError(()))
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.to_mnemonic())
            }
        }

        //--- Serialize and Deserialize

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ianatype {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.to_mnemonic())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ianatype {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s = <std::string::String as serde::Deserialize>
                    ::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        from_str_error!($error);
    };
}

macro_rules! from_str_error {
    ($description:expr) => {
        /// A string did not contain a known mnemonic.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct FromStrError(());

        impl std::error::Error for FromStrError {}

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str($description)
            }
        }
    };
}
