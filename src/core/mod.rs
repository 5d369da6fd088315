//! # Core Application Logic
//!
//! This module contains Shelf's business logic.
//! It knows nothing about any specific front end.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Resource (outcomes)  │
//!                    │  • filters (derived)    │
//!                    │  • config (settings)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │  catalog   │      │   store    │
//!     │  Adapter   │      │  client    │      │  client    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`resource`]: the `Resource` tagged union — how holders report outcomes
//! - [`filters`]: pure derived-view filters over the library snapshot
//! - [`config`]: settings with defaults → file → env resolution

pub mod config;
pub mod filters;
pub mod resource;
