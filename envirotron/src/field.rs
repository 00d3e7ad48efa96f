//! Per-field dispatch used by `#[derive(Override)]`

use crate::env::Env;
use crate::error::EnvError;
use crate::parse::ParseEnv;
use crate::Override;
use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::env::VarError;
use std::fs;

/// The `#[env(...)]` annotation of a field, as seen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Environment variable name, prefix included
    pub name: &'a str,
    /// Fall back to the file named by `{name}_FILE`
    pub from_file: bool,
}

impl<'a> Annotation<'a> {
    /// Annotation for the variable `name`, without file fallback.
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            from_file: false,
        }
    }

    /// Enable or disable the `{name}_FILE` fallback.
    pub const fn from_file(mut self, from_file: bool) -> Self {
        self.from_file = from_file;
        self
    }
}

/// A value that can sit in a public field of an overridable struct.
///
/// Scalars (anything implementing [`ParseEnv`]) are converted from their
/// annotated variable. Structs deriving [`Override`] are descended into
/// unconditionally. Standard collections are left untouched.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be overridden from the environment",
    label = "`{Self}` does not implement `envirotron::Field`",
    note = "derive `Override`, implement `ParseEnv`, or mark the field `#[env(skip)]`"
)]
pub trait Field {
    fn apply(&mut self, annotation: Option<Annotation<'_>>, env: &dyn Env) -> Result<(), EnvError>;
}

impl<T> Field for T
where
    T: ParseEnv,
{
    fn apply(&mut self, annotation: Option<Annotation<'_>>, env: &dyn Env) -> Result<(), EnvError> {
        let Some(annotation) = annotation else {
            return Ok(());
        };

        let Some(raw) = lookup(env, annotation)? else {
            tracing::trace!(var = annotation.name, "not set, keeping current value");
            return Ok(());
        };

        self.parse_env(&raw)
            .map_err(|e| EnvError::parse_error::<T>(annotation.name, e))?;
        tracing::debug!(var = annotation.name, ty = type_name::<T>(), "overridden");
        Ok(())
    }
}

/// Walk into a nested struct, ignoring any annotation it carries.
///
/// Used by macro-generated `Field` implementations.
#[doc(hidden)]
pub fn descend<T>(
    target: &mut T,
    annotation: Option<Annotation<'_>>,
    env: &dyn Env,
) -> Result<(), EnvError>
where
    T: Override + ?Sized,
{
    if let Some(annotation) = annotation {
        tracing::debug!(
            var = annotation.name,
            ty = type_name::<T>(),
            "annotation on nested struct ignored"
        );
    }
    target.override_from(env)
}

/// Get the raw value for `annotation`.
///
/// Priority order:
/// 1. Direct environment variable (`name`)
/// 2. File from environment variable (`{name}_FILE`) if `from_file` is set
///
/// Returns `Ok(None)` when neither is set.
pub fn lookup(env: &dyn Env, annotation: Annotation<'_>) -> Result<Option<String>, EnvError> {
    match env.var(annotation.name) {
        Ok(value) => return Ok(Some(value)),
        Err(VarError::NotUnicode(_)) => return Err(EnvError::not_unicode(annotation.name)),
        Err(VarError::NotPresent) => {}
    }

    if annotation.from_file {
        let file_var_name = format!("{}_FILE", annotation.name);
        match env.var(&file_var_name) {
            Ok(file_path) => {
                return fs::read_to_string(&file_path)
                    .map(|s| Some(s.trim().to_string()))
                    .map_err(|e| EnvError::FileRead {
                        name: file_var_name,
                        path: file_path,
                        source: e,
                    });
            }
            Err(VarError::NotUnicode(_)) => return Err(EnvError::not_unicode(file_var_name)),
            Err(VarError::NotPresent) => {}
        }
    }

    Ok(None)
}

macro_rules! ignored_collection {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Field for $ty<$($param),+> {
                fn apply(
                    &mut self,
                    annotation: Option<Annotation<'_>>,
                    _env: &dyn Env,
                ) -> Result<(), EnvError> {
                    if let Some(annotation) = annotation {
                        tracing::debug!(
                            var = annotation.name,
                            ty = type_name::<Self>(),
                            "collections are not converted, annotation ignored"
                        );
                    }
                    Ok(())
                }
            }
        )*
    };
}

ignored_collection!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);
