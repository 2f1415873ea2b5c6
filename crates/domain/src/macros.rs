//! Macro for implementing Display and FromStr for closed identifier enums
//!
//! Report kinds, report formats and alert severities all travel as short
//! lowercase identifiers (in URLs, filenames and CLI arguments). This macro
//! gives them a single Display/FromStr pair with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use prodboard_domain::impl_identifier_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Night,
//! }
//!
//! impl_identifier_conversions!(Shift {
//!     Morning => "morning",
//!     Night => "night",
//! });
//!
//! assert_eq!("NIGHT".parse::<Shift>().unwrap(), Shift::Night);
//! ```

/// Implements Display and FromStr traits for identifier enums
///
/// Unknown identifiers are rejected with
/// [`ProdboardError::InvalidInput`](crate::ProdboardError::InvalidInput)
/// naming the enum and the offending value.
#[macro_export]
macro_rules! impl_identifier_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire identifier of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::ProdboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::ProdboardError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
