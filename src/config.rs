//! Configuration for rang, loaded from `rang.toml`.
//!
//! - [load]: file lookup, parsing and the [Config] struct.
//! - [general]: deletion and logging options.
//! - [input]: key bindings.
//! - [theme]: colors for every style token.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::General;
pub use input::Keys;
pub use load::{Config, LoadReport};
pub use theme::Theme;
