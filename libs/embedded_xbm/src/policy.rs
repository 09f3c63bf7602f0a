use crate::error::{Precondition, XbmError};

/// Default threshold for the alpha channel to count as "large enough".
pub const DEFAULT_ALPHA_THRESHOLD: f32 = 0.2;
/// Default threshold for the summed color channels to count as "large enough".
pub const DEFAULT_COLOR_THRESHOLD: f32 = 0.3;

/// How a pixel is turned into a `1` or `0` bit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Both color and alpha must be above their thresholds.
    ColorAndAlpha,
    /// Either color or alpha must be above its threshold.
    ColorOrAlpha,
    /// Only alpha is considered.
    OnlyAlpha,
    /// Only color is considered, the alpha channel need not exist.
    IgnoreAlpha,
}

impl Mode {
    pub fn uses_alpha(self) -> bool {
        !matches!(self, Mode::IgnoreAlpha)
    }
}

/// Decision mode plus the two thresholds, each in `[0, 1]`.
///
/// The color threshold applies to the sum of R, G and B scaled to
/// `0..=765`, not to their average: pure red (sum 255) is "on" only for
/// thresholds below `1/3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub mode: Mode,
    pub color_threshold: f32,
    pub alpha_threshold: f32,
}

impl Policy {
    /// Default for in-memory conversion.
    pub const BUFFER_DEFAULT: Policy = Policy::with_mode(Mode::ColorOrAlpha);
    /// Default for text (XBM file) output.
    pub const FILE_DEFAULT: Policy = Policy::with_mode(Mode::ColorAndAlpha);

    pub const fn new(mode: Mode, color_threshold: f32, alpha_threshold: f32) -> Self {
        Self {
            mode,
            color_threshold,
            alpha_threshold,
        }
    }

    /// `mode` with the default thresholds.
    pub const fn with_mode(mode: Mode) -> Self {
        Self::new(mode, DEFAULT_COLOR_THRESHOLD, DEFAULT_ALPHA_THRESHOLD)
    }

    pub const fn with_color_threshold(self, color_threshold: f32) -> Self {
        Self {
            color_threshold,
            ..self
        }
    }

    pub const fn with_alpha_threshold(self, alpha_threshold: f32) -> Self {
        Self {
            alpha_threshold,
            ..self
        }
    }

    /// Checks that pixels with `channels` components can be classified
    /// under this policy.
    pub fn check_channels(&self, channels: usize) -> Result<(), XbmError> {
        match channels {
            4 => Ok(()),
            3 if self.mode.uses_alpha() => Err(Precondition::AlphaChannelMissing.into()),
            3 => Ok(()),
            n => Err(Precondition::UnsupportedChannels(n).into()),
        }
    }

    /// Decides whether one pixel becomes a set bit.
    ///
    /// `pixel` holds the channel bytes of exactly one pixel. Panics if it
    /// is shorter than the mode requires, see [`Policy::check_channels`].
    pub fn classify(&self, pixel: &[u8]) -> bool {
        match self.mode {
            Mode::ColorAndAlpha => self.by_color(pixel) && self.by_alpha(pixel),
            Mode::ColorOrAlpha => self.by_color(pixel) || self.by_alpha(pixel),
            Mode::OnlyAlpha => self.by_alpha(pixel),
            Mode::IgnoreAlpha => self.by_color(pixel),
        }
    }

    fn by_color(&self, pixel: &[u8]) -> bool {
        debug_assert!(pixel.len() >= 3);
        let sum = u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2]);
        f32::from(sum) > 255.0 * 3.0 * self.color_threshold
    }

    fn by_alpha(&self, pixel: &[u8]) -> bool {
        debug_assert!(pixel.len() == 4);
        f32::from(pixel[3]) > 255.0 * self.alpha_threshold
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::BUFFER_DEFAULT
    }
}
