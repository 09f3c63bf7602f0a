use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    image::ImageDrawable,
    pixelcolor::BinaryColor,
    primitives::{PointsIter, Rectangle},
};

use crate::{
    error::{Precondition, XbmError},
    layout::Dimensions,
};

/// A packed bitmap borrowed from flash or RAM, drawable on any
/// [`BinaryColor`] draw target. A set bit is drawn as [`BinaryColor::On`].
#[derive(Debug, Clone, Copy)]
pub struct XbmImage<'a> {
    data: &'a [u8],
    dims: Dimensions,
    size: Size,
}

impl<'a> XbmImage<'a> {
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, XbmError> {
        let dims = Dimensions::new(width, height)?;
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(Precondition::DimensionTooLarge.into());
        };
        let needed = dims.buffer_size();
        if data.len() < needed {
            return Err(Precondition::SourceTooSmall {
                needed,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self {
            data: &data[..needed],
            dims,
            size: Size::new(w, h),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<BinaryColor> {
        if x >= self.dims.width() || y >= self.dims.height() {
            return None;
        }
        let byte = self.data[y * self.dims.row_bytes() + x / 8];
        if (byte >> (x % 8)) & 1 == 1 {
            Some(BinaryColor::On)
        } else {
            Some(BinaryColor::Off)
        }
    }
}

impl OriginDimensions for XbmImage<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl ImageDrawable for XbmImage<'_> {
    type Color = BinaryColor;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw_sub_image(target, &Rectangle::new(Point::zero(), self.size()))
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        // Pixels are placed relative to the requested area, even where it
        // sticks out of the image.
        let visible = area.intersection(&Rectangle::new(Point::zero(), self.size));
        target.draw_iter(visible.points().filter_map(|point| {
            self.pixel(point.x as usize, point.y as usize)
                .map(|color| Pixel(point - area.top_left, color))
        }))
    }
}
