use anyhow::anyhow;

pub trait ScreenGeometry: Send + Sync {
    /// Primary display size in pixels.
    fn screen_size(&self) -> anyhow::Result<(f32, f32)>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RdevScreenGeometry;

impl ScreenGeometry for RdevScreenGeometry {
    fn screen_size(&self) -> anyhow::Result<(f32, f32)> {
        let (width, height) =
            rdev::display_size().map_err(|err| anyhow!("failed to query display size: {err:?}"))?;
        if width == 0 || height == 0 {
            return Err(anyhow!("display reported an empty size {width}x{height}"));
        }
        Ok((width as f32, height as f32))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScreenGeometry {
    pub width: f32,
    pub height: f32,
}

impl FixedScreenGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl ScreenGeometry for FixedScreenGeometry {
    fn screen_size(&self) -> anyhow::Result<(f32, f32)> {
        Ok((self.width, self.height))
    }
}
