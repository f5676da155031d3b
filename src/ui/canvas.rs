//! Drawing surface the watch face renders to

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::{MonoFont, MonoTextStyle},
    text::{renderer::TextRenderer, Baseline, Text},
    Drawable,
};

use super::ColorMode;

/// Font and color of one line
#[derive(Clone, Copy)]
pub struct LineStyle {
    pub font: &'static MonoFont<'static>,
    pub color: ColorMode,
}

impl LineStyle {
    pub fn text_style(&self) -> MonoTextStyle<'static, ColorMode> {
        MonoTextStyle::new(self.font, self.color)
    }
}

impl PartialEq for LineStyle {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.font, other.font) && self.color == other.color
    }
}

impl Eq for LineStyle {}

impl core::fmt::Debug for LineStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineStyle")
            .field("font", &self.font.character_size)
            .field("color", &self.color)
            .finish()
    }
}

/// Reports the extent of rendered text
pub trait TextMeasure {
    fn measure(&self, text: &str, style: &LineStyle) -> Size;
}

/// Anything the face can be drawn on
pub trait Canvas: TextMeasure {
    type Error;

    /// Fill the whole surface
    fn fill(&mut self, color: ColorMode) -> Result<(), Self::Error>;

    /// Draw text with its bounding box starting at `top_left`
    fn draw_text(
        &mut self,
        text: &str,
        top_left: Point,
        style: &LineStyle,
    ) -> Result<(), Self::Error>;
}

/// Measures text set in a monospace bitmap font
pub struct MonoMeasure;

impl TextMeasure for MonoMeasure {
    fn measure(&self, text: &str, style: &LineStyle) -> Size {
        style
            .text_style()
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
    }
}

/// Canvas on top of an embedded-graphics draw target
pub struct Surface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> Surface<'a, D>
where
    D: DrawTarget<Color = ColorMode>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }

    pub fn size(&self) -> Size {
        self.target.bounding_box().size
    }
}

impl<D> TextMeasure for Surface<'_, D> {
    fn measure(&self, text: &str, style: &LineStyle) -> Size {
        MonoMeasure.measure(text, style)
    }
}

impl<D> Canvas for Surface<'_, D>
where
    D: DrawTarget<Color = ColorMode>,
{
    type Error = D::Error;

    fn fill(&mut self, color: ColorMode) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        top_left: Point,
        style: &LineStyle,
    ) -> Result<(), Self::Error> {
        Text::with_baseline(text, top_left, style.text_style(), Baseline::Top)
            .draw(&mut *self.target)?;
        Ok(())
    }
}
