pub mod audio;
pub mod common;
pub mod image;
pub mod text;
pub mod vision;

pub use audio::*;
pub use common::*;
pub use image::*;
pub use text::*;
pub use vision::*;
