use anyhow::Context;

use thiserror::Error;

use crate::gfx::Image;

/// Looping type for animation playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Looping {
    /// Wrap back to the first frame when the last one finishes
    Loop,
    /// Hold on the last frame once it is reached
    OneShot,
}

/// A single frame's pixel rectangle within its sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Error returned when a sprite sheet cannot be sliced into the requested grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a {rows}x{cols} grid does not evenly divide a {width}x{height} sheet")]
pub struct GridMismatch {
    pub rows: u32,
    pub cols: u32,
    pub width: u32,
    pub height: u32,
}

/// A fixed-rate sprite animation, sliced from a sheet of equal-size frames.
/// Frames are ordered row-major: row 0 left-to-right, then row 1, and so on.
/// The frames only reference regions of the sheet; uploading the sheet itself
/// is left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<SpriteRegion>,
    frame_duration: f64,
}

impl Animation {
    /// Slice a decoded sprite sheet into a `rows` x `cols` grid of frames,
    /// each shown for `frame_duration` seconds.
    /// The grid must evenly divide the sheet's pixel dimensions.
    pub fn from_sheet(
        sheet: &Image,
        rows: u32,
        cols: u32,
        frame_duration: f64,
    ) -> Result<Self, GridMismatch> {
        let (width, height) = sheet.dimensions();
        if rows == 0 || cols == 0 || width % cols != 0 || height % rows != 0 {
            return Err(GridMismatch {
                rows,
                cols,
                width,
                height,
            });
        }
        let frame_width = width / cols;
        let frame_height = height / rows;

        let mut frames = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                frames.push(SpriteRegion {
                    x: col * frame_width,
                    y: row * frame_height,
                    width: frame_width,
                    height: frame_height,
                });
            }
        }
        Ok(Self {
            frames,
            frame_duration,
        })
    }

    /// The number of frames in the animation
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seconds each frame is shown for
    pub fn frame_duration(&self) -> f64 {
        self.frame_duration
    }

    /// Total duration of one playback cycle, in seconds
    pub fn duration(&self) -> f64 {
        self.frame_duration * self.frames.len() as f64
    }

    /// The ordered frame regions
    pub fn frames(&self) -> &[SpriteRegion] {
        &self.frames
    }

    /// The frame shown `state_time` seconds into playback
    pub fn frame_at(&self, state_time: f64, looping: Looping) -> SpriteRegion {
        let index = (state_time.max(0.0) / self.frame_duration) as usize;
        let index = match looping {
            Looping::Loop => index % self.frames.len(),
            Looping::OneShot => index.min(self.frames.len() - 1),
        };
        self.frames[index]
    }
}

/// Descriptor for a sprite sheet asset on disk
#[derive(Debug, Clone, Copy)]
pub struct SheetDesc {
    /// Path of the sheet image, relative to the working directory
    pub path: &'static str,
    /// Number of frame rows in the sheet
    pub rows: u32,
    /// Number of frame columns in the sheet
    pub cols: u32,
    /// Seconds between frames
    pub frame_duration: f64,
}

impl SheetDesc {
    /// Decode the sheet image and slice it into its animation
    pub fn load(&self) -> anyhow::Result<Animation> {
        let sheet = Image::read_png(self.path)?;
        let anim = Animation::from_sheet(&sheet, self.rows, self.cols, self.frame_duration)
            .with_context(|| format!("Failed to slice sprite sheet {}", self.path))?;
        Ok(anim)
    }
}
