//! Procedural icon assets for the EduDashPro mobile app.
//!
//! Two tools sit on top of this library:
//! - `generate-app-icon` paints the branded 1024×1024 icon and writes the
//!   app, adaptive, splash, notification and favicon PNGs.
//! - `make-round-icon` takes an existing square artwork and writes round
//!   (circle-masked) variants at the fixed asset sizes.

pub mod app_icon;
pub mod canvas;
pub mod logging;
pub mod manifest;
pub mod mask;
pub mod output;
pub mod palette;
pub mod round_icon;
pub mod text;
