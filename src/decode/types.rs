//! Item converter types and traits
//!
//! An [`ItemConverter`] turns one decoded JSON element into a typed value.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Trait for converting one JSON element into `T`
///
/// Implementations must fail on elements that match none of the shapes they
/// accept; a page never drops elements silently.
pub trait ItemConverter<T>: Send + Sync {
    /// Convert one element
    fn convert(&self, value: &Value) -> Result<T>;
}

// ============================================================================
// Serde Converter
// ============================================================================

/// Converter backed by `T`'s `Deserialize` impl
///
/// Covers model structs, scalars such as `bool`, and tagged enums resolved
/// by a discriminant field.
pub struct SerdeConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeConverter<T> {
    /// Create a new serde converter
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerdeConverter<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> ItemConverter<T> for SerdeConverter<T> {
    fn convert(&self, value: &Value) -> Result<T> {
        Ok(T::deserialize(value)?)
    }
}

// ============================================================================
// Function Converter
// ============================================================================

/// Converter wrapping a closure
#[derive(Clone)]
pub struct FnConverter<F> {
    f: F,
}

impl<F> fmt::Debug for FnConverter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter").finish_non_exhaustive()
    }
}

impl<T, F> ItemConverter<T> for FnConverter<F>
where
    F: Fn(&Value) -> Result<T> + Send + Sync,
{
    fn convert(&self, value: &Value) -> Result<T> {
        (self.f)(value)
    }
}

/// Build a converter from a closure
pub fn from_fn<T, F>(f: F) -> FnConverter<F>
where
    F: Fn(&Value) -> Result<T> + Send + Sync,
{
    FnConverter { f }
}
