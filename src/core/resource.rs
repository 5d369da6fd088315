//! # Fetch Outcome Wrapper
//!
//! `Resource<T>` is the single channel a screen state holder uses to report
//! the outcome of an asynchronous collaborator call to its view:
//!
//! ```text
//! Loading(true)  -- call in flight
//! Success(data)  -- call completed
//! Error(message) -- call threw; message is human-readable, never structured
//! ```
//!
//! Each action produces a fresh, independent value. There is no retry,
//! timeout, or cancellation here; an action runs to completion or failure
//! exactly once per invocation.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading(bool),
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    /// Wraps the outcome of a completed call. Any error is flattened to its
    /// `Display` rendering; callers never see a structured error.
    pub fn from_outcome<E: fmt::Display>(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading(true))
    }

    /// The successful payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading(flag) => Resource::Loading(flag),
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }
}

impl<T> Default for Resource<T> {
    /// Holders start out waiting for their first load.
    fn default() -> Self {
        Resource::Loading(true)
    }
}
