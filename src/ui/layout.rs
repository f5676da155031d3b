//! Line placement
//!
//! The six lines are spread evenly around the screen center, so the face
//! scales to any screen size while keeping line order and spacing.

use embedded_graphics::geometry::{Point, Size};

use crate::system::config::FaceConfig;

/// Number of lines on the face
pub const LINE_COUNT: usize = 6;

/// Line slots in half pitches from the center
const SLOTS: [i32; LINE_COUNT] = [-5, -3, -1, 1, 3, 5];

/// Default pitch is the screen height split into this many parts.
const PITCH_DIVISOR: u32 = LINE_COUNT as u32 + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub size: Size,
    pub center: Point,
}

impl Geometry {
    /// Center of the full screen, ignoring any insets
    pub fn new(size: Size) -> Self {
        Self {
            size,
            center: Point::new((size.width / 2) as i32, (size.height / 2) as i32),
        }
    }
}

/// Center points of every line, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub geometry: Geometry,
    pub anchors: [Point; LINE_COUNT],
}

impl Layout {
    pub fn new(size: Size, config: &FaceConfig) -> Self {
        let geometry = Geometry::new(size);
        let pitch = i64::from(line_pitch(size, config));
        let middle = i64::from(geometry.center.y) + i64::from(config.vertical_shift);

        // Floor division keeps every gap equal for odd pitches
        let anchors = SLOTS.map(|slot| {
            let y = middle + (i64::from(slot) * pitch).div_euclid(2);
            Point::new(geometry.center.x, saturate(y))
        });

        Self { geometry, anchors }
    }
}

/// Distance between line centers. A configured pitch is kept between the
/// accent font height and an even split of the screen.
fn line_pitch(size: Size, config: &FaceConfig) -> u32 {
    match config.line_pitch {
        Some(pitch) => {
            let min = config.accent_font.character_size.height;
            let max = (size.height / LINE_COUNT as u32).max(min);
            pitch.clamp(min, max)
        }
        None => size.height / PITCH_DIVISOR,
    }
}

fn saturate(y: i64) -> i32 {
    i32::try_from(y).unwrap_or(if y < 0 { i32::MIN } else { i32::MAX })
}
