//! # Screen State Holders
//!
//! One holder per screen, each bridging a declarative view to the two
//! external collaborators. A holder owns the latest `Resource`-wrapped data
//! and the imperative actions its screen can invoke. All actions are
//! fire-once and non-cancelable; holder state is mutated only by the
//! action's own completion.

pub mod detail;
pub mod library;
pub mod login;
pub mod search;
pub mod stats;

pub use detail::DetailScreen;
pub use library::LibraryScreen;
pub use login::LoginScreen;
pub use search::SearchScreen;
pub use stats::StatsScreen;
