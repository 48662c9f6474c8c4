// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

/// Allows to create one or more typed string ids
///
/// Defines the type and implements a variety of traits for it. The ids serialize transparently
/// as JSON strings, so the stored files keep plain string values.
#[macro_export]
macro_rules! string_newtype {
    ($($(#[$meta:meta])* $name:ident),+) => {
        $(
            #[derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                ::serde::Serialize,
                ::serde::Deserialize,
            )]
            #[serde(transparent)]
            $(#[$meta])*
            pub struct $name(String);

            impl $name {
                pub const fn from(inner: String) -> Self {
                    Self(inner)
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl ::std::convert::AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl PartialEq<str> for $name {
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }
        )+
    };
}
