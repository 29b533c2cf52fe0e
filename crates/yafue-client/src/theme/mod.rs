//! Light/dark theming: colour tokens, the theme store and the styles of the
//! shared UI primitives.

pub mod palette;
pub mod primitives;
pub mod store;

pub use palette::{Palette, COMPONENT_COLORS, DARK, GRADIENTS, LIGHT};
pub use store::ThemeStore;
