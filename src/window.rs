use image::{imageops, RgbImage};

use crate::offset::OffsetSpec;

/// required width and height of an eligible source image
pub const FRAME_SIZE: u32 = 512;

/// nominal edge length of every crop
pub const CROP_SIZE: u32 = 384;

/// A square crop window in source pixel space. The origin is signed since it is
/// computed without any bounds clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// in-bounds part of a crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl CropWindow {
    /// the unshifted window centered in a `width` x `height` frame
    pub fn centered(width: u32, height: u32) -> Self {
        let half = (CROP_SIZE / 2) as i64;
        CropWindow {
            x: (width / 2) as i64 - half,
            y: (height / 2) as i64 - half,
            size: CROP_SIZE,
        }
    }

    /// the centered window displaced by `spec`
    pub fn for_offset(width: u32, height: u32, spec: &OffsetSpec) -> Self {
        let (dx, dy) = spec.displacement();
        let base = Self::centered(width, height);
        CropWindow { x: base.x + dx, y: base.y + dy, ..base }
    }

    /// Intersect the window with a `width` x `height` frame.
    ///
    /// Parts of the window past the frame edge are dropped, so the result can be
    /// smaller than `size` (or empty). The window is never moved back into the frame.
    pub fn clip(&self, width: u32, height: u32) -> PixelRect {
        let span = |start: i64, limit: u32| {
            let limit = limit as i64;
            let lo = start.clamp(0, limit);
            let hi = (start + self.size as i64).clamp(0, limit);
            (lo as u32, (hi - lo).max(0) as u32)
        };

        let (x, width) = span(self.x, width);
        let (y, height) = span(self.y, height);
        PixelRect { x, y, width, height }
    }

    /// copy the in-bounds part of the window out of `img`
    pub fn extract(&self, img: &RgbImage) -> RgbImage {
        let r = self.clip(img.width(), img.height());
        imageops::crop_imm(img, r.x, r.y, r.width, r.height).to_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::{Direction, OFFSET_SPECS};
    use image::Rgb;

    #[test]
    fn centered_in_frame() {
        assert_eq!(CropWindow::centered(512, 512), CropWindow { x: 64, y: 64, size: 384 });
    }

    #[test]
    fn offset_origins() {
        let rd3 = OffsetSpec { direction: Direction::RD, step: 3 };
        let w = CropWindow::for_offset(512, 512, &rd3);
        assert_eq!((w.x, w.y), (100, 100));

        let l1 = OffsetSpec { direction: Direction::L, step: 1 };
        let w = CropWindow::for_offset(512, 512, &l1);
        assert_eq!((w.x, w.y), (52, 64));

        let u5 = OffsetSpec { direction: Direction::U, step: 5 };
        let w = CropWindow::for_offset(512, 512, &u5);
        assert_eq!((w.x, w.y), (64, 4));
    }

    #[test]
    fn every_offset_fits_the_frame() {
        for spec in OFFSET_SPECS.iter() {
            let r = CropWindow::for_offset(FRAME_SIZE, FRAME_SIZE, spec).clip(FRAME_SIZE, FRAME_SIZE);
            assert_eq!((r.width, r.height), (CROP_SIZE, CROP_SIZE), "{spec}");
        }
    }

    #[test]
    fn clip_truncates_at_frame_edge() {
        let w = CropWindow { x: 200, y: -10, size: 384 };
        let r = w.clip(512, 512);
        assert_eq!(r, PixelRect { x: 200, y: 0, width: 312, height: 374 });
    }

    #[test]
    fn clip_outside_is_empty() {
        let w = CropWindow { x: 600, y: 0, size: 384 };
        assert!(w.clip(512, 512).is_empty());
    }

    #[test]
    fn extract_copies_window_pixels() {
        let img = RgbImage::from_fn(512, 512, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 7]));
        let rd3 = OffsetSpec { direction: Direction::RD, step: 3 };
        let crop = CropWindow::for_offset(512, 512, &rd3).extract(&img);

        assert_eq!(crop.dimensions(), (384, 384));
        assert_eq!(crop.get_pixel(0, 0), img.get_pixel(100, 100));
        assert_eq!(crop.get_pixel(383, 383), img.get_pixel(483, 483));
    }
}
