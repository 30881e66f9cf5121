//! Pixel layout of the cabin, independent of any drawing backend.

use board_core::{CabinLayout, SeatPos};

/// Square seat glyph edge, in pixels.
pub const SEAT_SIZE: f32 = 12.0;
/// Gap between adjacent seat glyphs (and around the window border).
pub const SEAT_SPACING: f32 = 3.0;
/// Extra horizontal gap where the aisle splits the row.
pub const AISLE_SPACING: f32 = 18.0;

/// Distance from one seat's top-left corner to the next.
const PITCH: f32 = SEAT_SIZE + SEAT_SPACING;

/// Axis-aligned rectangle in window coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Precomputed pixel geometry for one cabin layout.
///
/// Row 1 is drawn at the top of the window (the aisle entrance), so a
/// queued passenger visibly walks downwards as its aisle position grows.
#[derive(Clone, Debug)]
pub struct CabinGeometry {
    layout: CabinLayout,
    width: f32,
    height: f32,
    aisle_x: f32,
}

impl CabinGeometry {
    pub fn new(layout: CabinLayout) -> Self {
        let height = SEAT_SPACING + layout.rows() as f32 * PITCH;
        let width = AISLE_SPACING + SEAT_SPACING + layout.seats_per_row() as f32 * PITCH;
        let aisle_x = SEAT_SPACING + PITCH * layout.aisle_after() as f32;
        Self { layout, width, height, aisle_x }
    }

    #[inline]
    pub fn window_width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn window_height(&self) -> f32 {
        self.height
    }

    pub fn layout(&self) -> &CabinLayout {
        &self.layout
    }

    /// Screen rectangle of a seat glyph.  Seats to the right of the divider
    /// are shifted outwards by the aisle gap.
    pub fn seat_rect(&self, pos: SeatPos) -> Rect {
        let mut x = SEAT_SPACING + PITCH * (pos.seat - 1) as f32;
        if pos.seat > self.layout.aisle_after() {
            x += AISLE_SPACING;
        }
        let y = SEAT_SPACING + PITCH * (pos.row - 1) as f32;
        Rect { x, y, w: SEAT_SIZE, h: SEAT_SIZE }
    }

    /// Screen rectangle of a queued passenger standing in the aisle next to
    /// `row`.
    pub fn aisle_rect(&self, row: u32) -> Rect {
        Rect {
            x: self.aisle_x,
            y: SEAT_SPACING + PITCH * (row - 1) as f32,
            w: SEAT_SIZE,
            h: SEAT_SIZE,
        }
    }
}
