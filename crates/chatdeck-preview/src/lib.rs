//! ChatDeck Widget Preview
//!
//! Read-only rendering of the configured widget for the console's live
//! preview panel. Maps appearance fields onto concrete style values and
//! renders a representative conversation from the current snapshot.

pub mod render;
pub mod style;

pub use render::{DeviceFrame, PreviewRenderer, PreviewState};
pub use style::WidgetStyle;
