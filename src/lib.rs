//! Viewpoint-shifted crops for image pair datasets.
//!
//! Every 512x512 image below an input folder is cropped 40 times: a 384x384 window
//! around the center, shifted in one of eight compass directions by 12 to 60 pixels.
//! Each variant is written to its own `Offset-<direction>-<step>` tree that mirrors
//! the input tree, keeping file names and formats.

mod config;
mod error;
mod generator;
mod offset;
mod report;
mod window;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{
    is_supported_image, load_source_image, run, OffsetCropGenerator, RunStatistics, SUPPORTED_EXTENSIONS,
};
pub use offset::{Direction, Horizontal, OffsetSpec, Vertical, MAX_STEP, NUM_OFFSET_SPECS, OFFSET_SPECS, STEP_PIXELS};
pub use report::shallow_listing;
pub use window::{CropWindow, PixelRect, CROP_SIZE, FRAME_SIZE};
