//! Conversion of raw environment values into field types

use crate::error::ParseBoolError;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Parse a raw environment value into `self`.
///
/// Built-in implementations cover `bool`, every integer width, `f32`, `f64`,
/// `String` and `Option<T>`. Implement it for your own types to take over
/// conversion of fields of that type:
///
/// ```rust
/// use envirotron::ParseEnv;
///
/// #[derive(Debug, PartialEq)]
/// struct Doubler(i64);
///
/// impl ParseEnv for Doubler {
///     type Err = std::num::ParseIntError;
///
///     fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err> {
///         self.0 = raw.parse::<i64>()? * 2;
///         Ok(())
///     }
/// }
///
/// let mut d = Doubler(1);
/// d.parse_env("42").unwrap();
/// assert_eq!(d, Doubler(84));
/// ```
///
/// An implementation must leave `self` untouched when it returns an error.
pub trait ParseEnv {
    type Err: fmt::Display;

    fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err>;
}

/// Parse a boolean from the case-insensitive `y/yes/true/1` and `n/no/false/0`
/// vocabulary.
pub fn parse_bool(raw: &str) -> Result<bool, ParseBoolError> {
    const TRUES: [&str; 4] = ["y", "yes", "true", "1"];
    const FALSES: [&str; 4] = ["n", "no", "false", "0"];

    if TRUES.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if FALSES.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(ParseBoolError {
            value: raw.to_string(),
        })
    }
}

impl ParseEnv for bool {
    type Err = ParseBoolError;

    fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err> {
        *self = parse_bool(raw)?;
        Ok(())
    }
}

impl ParseEnv for String {
    type Err = Infallible;

    fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err> {
        raw.clone_into(self);
        Ok(())
    }
}

macro_rules! parse_env_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParseEnv for $ty {
                type Err = <$ty as FromStr>::Err;

                #[inline]
                fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err> {
                    *self = raw.parse()?;
                    Ok(())
                }
            }
        )*
    };
}

parse_env_from_str!(i8, i16, i32, i64, i128, isize);
parse_env_from_str!(u8, u16, u32, u64, u128, usize);
parse_env_from_str!(f32, f64);

impl<T> ParseEnv for Option<T>
where
    T: ParseEnv + Default,
{
    type Err = T::Err;

    fn parse_env(&mut self, raw: &str) -> Result<(), Self::Err> {
        match self {
            Some(inner) => inner.parse_env(raw),
            None => {
                let mut inner = T::default();
                inner.parse_env(raw)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }
}
