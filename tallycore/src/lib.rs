//! tallycore — shared library for the tally calculator window

pub mod dither;
pub mod logging;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::TallyTheme;
