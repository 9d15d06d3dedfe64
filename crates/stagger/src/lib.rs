pub mod builder;
pub mod closing;
pub mod color;
pub mod controller;
pub mod ease;
pub mod icon;
pub mod item;
pub mod label;
pub mod layout;
pub mod macros;
pub mod scene;
pub mod timeline;
pub mod wm;

pub use controller::{Accessibility, MenuController, MenuOptions, Phase};

/// Socket the overlay daemon listens on for `show`, `hide` and `toggle`.
pub const SOCKET_PATH: &str = "/tmp/stagger.sock";
