//! One layout module per theme
//!
//! Each module exposes a single `render` function translating the profile
//! into that theme's visual structure. Themes share the contract helpers
//! but are otherwise independent layouts; styling is expressed as utility
//! classes on the emitted nodes.

pub mod bold;
pub mod cold;
pub mod compact;
pub mod creative;
pub mod cyber;
pub mod elegant;
pub mod minimalist;
pub mod modern;
pub mod nature;
pub mod newspaper;
pub mod outline;
pub mod professional;
pub mod swiss;
pub mod terminal;
pub mod warm;
