//! Macro for implementing Display and FromStr for label enums
//!
//! Several domain enums (rejection reasons, log levels) travel as short
//! lowercase labels in logs and configuration. This macro provides a single
//! implementation for both Display and FromStr with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use citynext_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Weekday {
//!     Saturday,
//!     Sunday,
//! }
//!
//! impl_domain_label_conversions!(Weekday {
//!     Saturday => "saturday",
//!     Sunday => "sunday",
//! });
//!
//! assert_eq!(Weekday::Sunday.to_string(), "sunday");
//! assert_eq!("SATURDAY".parse::<Weekday>().unwrap(), Weekday::Saturday);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their label
/// - FromStr trait: parses case-insensitive, whitespace-trimmed labels
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase labels
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
