//! Typed input and output fields
//!
//! Concrete jobs embed these instead of bare fields so that reading an input
//! that was never assigned is an error, and reading an output that was never
//! assigned yields a default built on first access.

use std::cell::OnceCell;

use crate::error::{JobError, Result};

/// Settable job input
///
/// No default is ever synthesized; reading before `set` fails with
/// [`JobError::MissingInput`].
#[derive(Debug, Clone)]
pub struct Input<T> {
    value: Option<T>,
}

impl<T> Input<T> {
    /// Creates an empty input
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn get(&self) -> Result<&T> {
        self.value.as_ref().ok_or_else(Self::missing)
    }

    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.value.as_mut().ok_or_else(Self::missing)
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Removes and returns the input, leaving it unset
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    fn missing() -> JobError {
        JobError::MissingInput {
            job: std::any::type_name::<T>(),
        }
    }
}

impl<T> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Job output with a lazily-constructed default
///
/// The first read of an unassigned output builds `T::default()` exactly once
/// and caches it, so repeated reads see the same instance. Numeric and other
/// plain value types simply yield their zero value through the same path.
#[derive(Debug, Clone)]
pub struct Output<T> {
    value: OnceCell<T>,
}

impl<T: Default> Output<T> {
    /// Creates an output with nothing assigned and nothing constructed
    pub fn new() -> Self {
        Self {
            value: OnceCell::new(),
        }
    }

    /// Returns the output, constructing the default on first read if unset
    pub fn get(&self) -> &T {
        self.value.get_or_init(T::default)
    }

    /// Replaces the output with an explicit value
    pub fn set(&mut self, value: T) {
        self.value = OnceCell::from(value);
    }

    /// Reads the output without forcing construction
    pub fn peek(&self) -> Option<&T> {
        self.value.get()
    }

    /// Mutable access to an assigned or already-constructed output
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.value.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner().unwrap_or_default()
    }
}

impl<T: Default> Default for Output<T> {
    fn default() -> Self {
        Self::new()
    }
}
