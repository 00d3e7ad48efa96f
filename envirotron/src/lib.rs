//! Override configuration structs from environment variables
//!
//! `envirotron` walks the public fields of a configuration struct and, for every
//! field annotated with an environment variable name, replaces its value with
//! the variable's value when that variable is set. Fields keep whatever value
//! they had before the call when the variable is unset, so defaults are simply
//! the values you build the struct with.
//!
//! # Features
//!
//! - **Declarative**: Field walk generated with `#[derive(Override)]`
//! - **Nested structs**: Struct-typed fields are descended into automatically
//! - **Type-safe**: Unsupported field types are rejected at compile time
//! - **Custom conversions**: Implement [`ParseEnv`] for your own types
//! - **File-based values**: Read `{VAR}_FILE` when `VAR` is unset
//!
//! # Value Parsing
//!
//! - Strings: taken verbatim, `NAME=overridden name`
//! - Integers: base 10, width checked, `SOME_UINT_8=255`
//! - Floats: `SOME_FLOAT_64=123456789.123456789`
//! - Booleans: `y`, `yes`, `true`, `1` and `n`, `no`, `false`, `0`, in any case
//! - `Option<T>`: `Some(..)` of the inner conversion
//!
//! # Example
//!
//! ```rust
//! use envirotron::Override;
//!
//! #[derive(Debug, Override)]
//! pub struct Shallow {
//!     #[env(name = "NAME")]
//!     pub name: String,
//!
//!     pub ignored: String,
//!
//!     #[env(name = "SECRET")]
//!     hidden: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = envirotron::MapEnv::from_iter([
//!     ("NAME", "overridden name"),
//!     ("IGNORED", "overridden ignored"),
//!     ("SECRET", "overridden secret"),
//! ]);
//!
//! let mut shallow = Shallow {
//!     name: "initial name".to_string(),
//!     ignored: "initial ignored".to_string(),
//!     hidden: "initial hidden".to_string(),
//! };
//! envirotron::override_from(&mut shallow, &env)?;
//!
//! assert_eq!(shallow.name, "overridden name");
//! assert_eq!(shallow.ignored, "initial ignored");
//! assert_eq!(shallow.hidden, "initial hidden");
//! # Ok(())
//! # }
//! ```
//!
//! Only `pub` fields are considered. Private and restricted (`pub(crate)`)
//! fields are never modified, even when annotated.
//!
//! # Attributes
//!
//! ## `#[env(name = "VAR")]`
//!
//! Override the field from `VAR` when it is set.
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! Struct-level. Prepend `APP_` to every variable name declared in this
//! struct. Nested structs use their own prefix.
//!
//! ```rust
//! # use envirotron::Override;
//! #[derive(Override)]
//! #[env(prefix = "THING_")]
//! pub struct Config {
//!     // Reads THING_URL
//!     #[env(name = "URL")]
//!     pub url: String,
//! }
//! ```
//!
//! ## `#[env(from_file)]`
//!
//! When `VAR` is unset, read the value from the file named by `VAR_FILE`.
//! Useful for Kubernetes or Docker secrets mounted as files.
//!
//! ```rust
//! # use envirotron::Override;
//! #[derive(Override)]
//! pub struct Config {
//!     // Reads THING_PASSWORD, then the file named by THING_PASSWORD_FILE
//!     #[env(name = "THING_PASSWORD", from_file)]
//!     pub password: String,
//! }
//! ```
//!
//! ## `#[env(skip)]`
//!
//! Leave a public field out of the walk entirely. Needed for field types that
//! neither implement [`ParseEnv`] nor derive [`Override`]; without it such a
//! field does not compile:
//!
//! ```compile_fail,E0277
//! use envirotron::Override;
//!
//! pub struct Opaque;
//!
//! #[derive(Override)]
//! pub struct Config {
//!     #[env(name = "OPAQUE")]
//!     pub opaque: Opaque,
//! }
//! ```
//!
//! ```rust
//! use envirotron::Override;
//!
//! pub struct Opaque;
//!
//! #[derive(Override)]
//! pub struct Config {
//!     #[env(skip)]
//!     pub opaque: Opaque,
//! }
//! ```
//!
//! # Errors
//!
//! Conversion failures are returned as [`EnvError`]. The pass stops at the
//! first failure: earlier fields stay overridden, the failing field and all
//! later ones keep their previous values.

mod env;
mod error;
#[doc(hidden)]
pub mod field;
mod parse;

pub use env::{Env, MapEnv, SystemEnv};
pub use envirotron_derive::Override;
pub use error::{EnvError, ParseBoolError};
pub use field::{Annotation, Field};
pub use parse::{parse_bool, ParseEnv};

/// A struct whose public fields can be overridden from environment variables.
///
/// Implement with `#[derive(Override)]`.
pub trait Override {
    /// Apply every annotated variable that is set in `env`.
    fn override_from(&mut self, env: &dyn Env) -> Result<(), EnvError>;

    /// Apply every annotated variable that is set in the process environment.
    fn override_env(&mut self) -> Result<(), EnvError> {
        self.override_from(&SystemEnv)
    }
}

/// Override `target` from the process environment.
///
/// # Errors
///
/// Returns the first conversion failure. See [`EnvError`].
pub fn override_env<T>(target: &mut T) -> Result<(), EnvError>
where
    T: Override + ?Sized,
{
    target.override_env()
}

/// Override `target` from `env`.
///
/// # Errors
///
/// Returns the first conversion failure. See [`EnvError`].
pub fn override_from<T>(target: &mut T, env: &dyn Env) -> Result<(), EnvError>
where
    T: Override + ?Sized,
{
    target.override_from(env)
}
