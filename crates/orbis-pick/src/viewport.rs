//! Pixel to normalized-device-coordinate conversion.

use glam::DVec2;

use crate::error::PickError;

/// The drawable area a click was made in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Convert a pixel position (origin top-left, y down) to NDC.
    ///
    /// NDC spans `[-1, 1]` on both axes with +Y up, so the pixel Y axis is
    /// flipped.
    pub fn to_ndc(&self, screen: DVec2) -> Result<DVec2, PickError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(PickError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(DVec2::new(
            (screen.x / self.width) * 2.0 - 1.0,
            -(screen.y / self.height) * 2.0 + 1.0,
        ))
    }

    /// Convert NDC back to a pixel position. Inverse of [`to_ndc`](Self::to_ndc).
    pub fn to_screen(&self, ndc: DVec2) -> DVec2 {
        DVec2::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (1.0 - ndc.y) / 2.0 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.to_ndc(DVec2::new(400.0, 300.0)).unwrap(), DVec2::ZERO);
        assert_eq!(
            viewport.to_ndc(DVec2::new(0.0, 0.0)).unwrap(),
            DVec2::new(-1.0, 1.0)
        );
        assert_eq!(
            viewport.to_ndc(DVec2::new(800.0, 600.0)).unwrap(),
            DVec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let viewport = Viewport::new(100.0, 100.0);
        let upper = viewport.to_ndc(DVec2::new(50.0, 25.0)).unwrap();
        assert_eq!(upper.y, 0.5);
    }

    #[test]
    fn test_to_screen_inverts_to_ndc() {
        let viewport = Viewport::new(1024.0, 768.0);
        let pixel = DVec2::new(123.0, 456.0);
        let back = viewport.to_screen(viewport.to_ndc(pixel).unwrap());
        assert!((back - pixel).length() < 1e-9);
    }

    #[test]
    fn test_zero_sized_viewport() {
        let viewport = Viewport::new(0.0, 600.0);
        assert!(matches!(
            viewport.to_ndc(DVec2::ZERO),
            Err(PickError::InvalidViewport { .. })
        ));
        assert!(Viewport::new(800.0, f64::NAN).to_ndc(DVec2::ZERO).is_err());
    }
}
