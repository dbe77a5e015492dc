// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative helpers shared by the parameter and property layers.

/// Keyword enums with a closed set of values.
macro_rules! define_keyword_enum {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
        }

        impl $Name {
            /// The keyword written on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$Variant => $kw,
                    )*
                }
            }

            /// Look up a keyword, case-insensitively.
            #[must_use]
            pub fn from_keyword(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Some(Self::$Variant);
                    }
                )*
                None
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Keyword enums that also carry x-name and IANA values they do not know.
macro_rules! define_keyword_enum_with_unknown {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
            /// Experimental or unrecognized value, kept verbatim
            Unknown(String),
        }

        impl $Name {
            /// The keyword written on the wire.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$Variant => $kw,
                    )*
                    Self::Unknown(s) => s,
                }
            }

            /// Look up a keyword, case-insensitively, falling back to
            /// [`Self::Unknown`].
            #[must_use]
            pub fn from_keyword(s: &str) -> Self {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Self::$Variant;
                    }
                )*
                Self::Unknown(s.to_string())
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
