use serde::{Deserialize, Serialize};

use crate::errors::{Result, SquashError};

/// Court measurements in meters.
///
/// The coordinate frame used everywhere in the crate is Y-up, with the
/// court centred on the origin: the front wall sits at `z = -length / 2`,
/// the back wall at `z = +length / 2`, and the side walls at
/// `x = ±width / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtDimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,

    // === Front wall markings ===
    pub tin_height: f32,
    pub service_line_height: f32,
    pub out_line_height: f32,

    // === Floor markings ===
    /// Distance from the back wall to the short line.
    pub short_line_distance: f32,
    /// Length of the half-court line, measured from the back wall.
    pub half_court_line_length: f32,
    pub service_box_width: f32,
    pub service_box_depth: f32,

    /// Height removed from the top of the back wall. The back wall panel
    /// is `height - back_wall_cutout` tall, starting at floor level.
    pub back_wall_cutout: f32,
}

impl Default for CourtDimensions {
    fn default() -> Self {
        Self::regulation()
    }
}

impl CourtDimensions {
    /// The regulation singles court.
    #[must_use]
    pub const fn regulation() -> Self {
        Self {
            width: 6.4,
            length: 9.75,
            height: 4.57,
            tin_height: 0.48,
            service_line_height: 1.83,
            out_line_height: 4.57,
            short_line_distance: 4.26,
            half_court_line_length: 4.26,
            service_box_width: 1.6,
            service_box_depth: 1.6,
            back_wall_cutout: 2.44,
        }
    }

    #[inline]
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    #[must_use]
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// Height of the back wall panel.
    #[inline]
    #[must_use]
    pub fn back_wall_height(&self) -> f32 {
        self.height - self.back_wall_cutout
    }

    /// `z` coordinate of the short line.
    #[inline]
    #[must_use]
    pub fn short_line_z(&self) -> f32 {
        self.half_length() - self.short_line_distance
    }

    /// Angle of the side-wall out-of-court diagonal, falling from the front
    /// wall out line down to the top of the back wall.
    #[inline]
    #[must_use]
    pub fn diagonal_angle(&self) -> f32 {
        (self.back_wall_cutout / self.length).atan()
    }

    /// Length of the side-wall out-of-court diagonal.
    #[inline]
    #[must_use]
    pub fn diagonal_length(&self) -> f32 {
        self.length.hypot(self.back_wall_cutout)
    }

    /// Fails fast on dimensions no court could be built from.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
            ("tin_height", self.tin_height),
            ("service_line_height", self.service_line_height),
            ("out_line_height", self.out_line_height),
            ("short_line_distance", self.short_line_distance),
            ("half_court_line_length", self.half_court_line_length),
            ("service_box_width", self.service_box_width),
            ("service_box_depth", self.service_box_depth),
            ("back_wall_cutout", self.back_wall_cutout),
        ];
        for (field, value) in lengths {
            // `is_finite` is false for NaN
            if !value.is_finite() || value <= 0.0 {
                return Err(SquashError::NonPositiveDimension { field, value });
            }
        }

        if !(self.tin_height < self.service_line_height
            && self.service_line_height < self.out_line_height
            && self.out_line_height <= self.height)
        {
            return Err(SquashError::MarkingHeightOrder {
                tin: self.tin_height,
                service_line: self.service_line_height,
                out_line: self.out_line_height,
                height: self.height,
            });
        }

        let fits = [
            ("short_line_distance", self.short_line_distance, self.length),
            ("half_court_line_length", self.half_court_line_length, self.length),
            ("back_wall_cutout", self.back_wall_cutout, self.height),
            ("service_box_width", self.service_box_width, self.half_width()),
            ("service_box_depth", self.service_box_depth, self.short_line_distance),
        ];
        for (field, value, limit) in fits {
            if value >= limit {
                return Err(SquashError::MarkingOutOfCourt { field, value, limit });
            }
        }

        Ok(())
    }
}
