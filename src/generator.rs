use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader, RgbImage};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::offset::OFFSET_SPECS;
use crate::window::{CropWindow, FRAME_SIZE};

/// file extensions (lower case, without dot) that are treated as images
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

/// Counters of a generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// files with a supported extension, whether or not they could be cropped
    pub total_images_seen: usize,
    pub total_crops_written: usize,
    pub decode_failures: usize,
    pub dimension_mismatches: usize,
    pub write_failures: usize,
}

impl RunStatistics {
    pub fn skipped_images(&self) -> usize {
        self.decode_failures + self.dimension_mismatches
    }
}

/// case-insensitive check of the file extension against `SUPPORTED_EXTENSIONS`
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Decode the image at `path` as 8-bit RGB and check that it is `FRAME_SIZE` square.
///
/// The format is detected from the file content, not the extension.
pub fn load_source_image(path: &Path) -> Result<RgbImage> {
    let decode_err = |source: ImageError| Error::Decode { path: path.to_path_buf(), source };

    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    let (width, height) = (img.width(), img.height());
    if width != FRAME_SIZE || height != FRAME_SIZE {
        return Err(Error::DimensionMismatch { path: path.to_path_buf(), width, height });
    }

    Ok(img.to_rgb8())
}

/// Walks an input tree and writes every offset crop of each eligible image into the
/// matching `Offset-<direction>-<step>` tree below the output base directory.
pub struct OffsetCropGenerator {
    config: GeneratorConfig,
}

impl OffsetCropGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Process the whole input tree.
    ///
    /// Only a missing input folder or a directory that cannot be created ends the run
    /// early. Undecodable images, images of the wrong size and failed crop writes are
    /// logged, counted and skipped.
    ///
    /// If the output base directory lies inside the input folder, that subtree is not walked.
    pub fn run(&self) -> Result<RunStatistics> {
        let input = &self.config.input_folder;
        if !input.is_dir() {
            return Err(Error::InputNotADirectory { path: input.clone() });
        }

        let output_base = self.prepare_output_dirs()?;
        let mut stats = RunStatistics::default();

        info!("processing folder {}", input.display());
        info!("writing {} offset trees to {}", OFFSET_SPECS.len(), self.config.output_base_dir.display());

        let walker = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_same_dir(e, &output_base));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if !is_supported_image(path) {
                debug!("ignoring {}", path.display());
                continue;
            }
            let Ok(rel_path) = path.strip_prefix(input) else {
                continue;
            };

            self.process_file(path, rel_path, &mut stats)?;
        }

        info!(
            "done: {} images seen, {} crops written, output in {}",
            stats.total_images_seen,
            stats.total_crops_written,
            self.config.output_base_dir.display()
        );
        if stats.skipped_images() > 0 || stats.write_failures > 0 {
            info!(
                "skipped {} undecodable and {} wrongly sized images, {} crop writes failed",
                stats.decode_failures, stats.dimension_mismatches, stats.write_failures
            );
        }

        Ok(stats)
    }

    /// Create the output base and the top level directory of every offset tree.
    /// Returns the canonical output base path.
    fn prepare_output_dirs(&self) -> Result<PathBuf> {
        let base = &self.config.output_base_dir;
        create_dir_all(base)?;

        for spec in OFFSET_SPECS.iter() {
            create_dir_all(&self.config.offset_dir(&spec.name()))?;
        }

        fs::canonicalize(base).map_err(|source| Error::CreateDir { path: base.clone(), source })
    }

    fn process_file(&self, path: &Path, rel_path: &Path, stats: &mut RunStatistics) -> Result<()> {
        stats.total_images_seen += 1;

        let img = match load_source_image(path) {
            Ok(img) => img,
            Err(e @ Error::Decode { .. }) => {
                warn!("{e}");
                stats.decode_failures += 1;
                return Ok(());
            }
            Err(e @ Error::DimensionMismatch { .. }) => {
                warn!("skipping {e}");
                stats.dimension_mismatches += 1;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        info!("processing {}", rel_path.display());

        let (width, height) = img.dimensions();
        let mut generated = 0;

        for spec in OFFSET_SPECS.iter() {
            let out_path = self.config.output_path(&spec.name(), rel_path);
            if let Some(parent) = out_path.parent() {
                create_dir_all(parent)?;
            }

            let crop = CropWindow::for_offset(width, height, spec).extract(&img);
            match save_crop(&crop, &out_path) {
                Ok(()) => {
                    debug!("wrote {}", out_path.display());
                    stats.total_crops_written += 1;
                    generated += 1;
                }
                Err(e) => {
                    warn!("{e}");
                    stats.write_failures += 1;
                }
            }
        }

        info!("  generated {generated} offset variants");
        Ok(())
    }
}

/// Convenience wrapper around `OffsetCropGenerator::run`.
pub fn run(config: &GeneratorConfig) -> Result<RunStatistics> {
    OffsetCropGenerator::new(config.clone()).run()
}

// --- output helpers ---

/// encode with the format implied by the extension of `path`
fn save_crop(crop: &RgbImage, path: &Path) -> Result<()> {
    crop.save(path).map_err(|source| Error::Encode { path: path.to_path_buf(), source })
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir { path: path.to_path_buf(), source })
}

fn is_same_dir(entry: &DirEntry, dir: &Path) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).map(|p| p == dir).unwrap_or(false)
}
