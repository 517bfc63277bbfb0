//! Procedural court model.
//!
//! [`build_court`] turns a set of [`CourtDimensions`] into the full list of
//! surfaces, boundary lines and (optionally) text labels. It is a pure
//! function: the same inputs always produce an identical [`CourtLayout`], so
//! callers can rebuild freely whenever label visibility changes.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};

use super::descriptors::{
    CourtColor, CourtFeature, CourtLayout, CourtSide, EdgeLineDescriptor, LabelDescriptor, Side,
    SurfaceDescriptor,
};
use super::dimensions::CourtDimensions;

pub const SURFACE_COUNT: usize = 21;
pub const EDGE_COUNT: usize = 8;
pub const LABEL_COUNT: usize = 10;

/// Width of every painted line.
pub const MARKING_WIDTH: f32 = 0.05;
/// Height of the panel above each side and front wall.
pub const OUT_BAND_HEIGHT: f32 = 2.0;

// Lift markings off their base surface to avoid z-fighting.
const FLOOR_OFFSET: f32 = 0.002;
const FLOOR_FILL_OFFSET: f32 = 0.001;
const WALL_OFFSET: f32 = 0.005;
const LABEL_OFFSET: f32 = 0.002;

const FLOOR_ROTATION: Vec3 = Vec3::new(FRAC_PI_2, 0.0, 0.0);
const FLOOR_TEXT_ROTATION: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

const WALL_FONT_SIZE: f32 = 0.5;
const MARKING_FONT_SIZE: f32 = 0.3;

#[must_use]
pub fn build_court(dims: &CourtDimensions, show_labels: bool) -> CourtLayout {
    debug_assert!(dims.validate().is_ok(), "invalid court dimensions: {dims:?}");

    let mut surfaces = Vec::with_capacity(SURFACE_COUNT);
    push_walls(&mut surfaces, dims);
    push_diagonals(&mut surfaces, dims);
    push_floor_markings(&mut surfaces, dims);
    push_front_wall_markings(&mut surfaces, dims);

    let labels = if show_labels {
        labels(dims)
    } else {
        Vec::new()
    };

    CourtLayout {
        surfaces,
        edges: edges(dims),
        labels,
    }
}

/// Rotation that turns the unit plane to face into the court from a side
/// wall.
fn side_wall_rotation(side: CourtSide) -> Vec3 {
    match side {
        CourtSide::Left => Vec3::new(0.0, PI * 1.5, 0.0),
        CourtSide::Right => Vec3::new(0.0, FRAC_PI_2, 0.0),
    }
}

fn floor_patch(feature: CourtFeature, position: Vec3, extent: Vec2, color: CourtColor) -> SurfaceDescriptor {
    SurfaceDescriptor {
        feature,
        position,
        rotation: FLOOR_ROTATION,
        extent,
        color,
        side: Side::Double,
    }
}

fn front_wall_panel(feature: CourtFeature, position: Vec3, extent: Vec2, color: CourtColor) -> SurfaceDescriptor {
    SurfaceDescriptor {
        feature,
        position,
        rotation: Vec3::ZERO,
        extent,
        color,
        side: Side::Front,
    }
}

fn push_walls(out: &mut Vec<SurfaceDescriptor>, d: &CourtDimensions) {
    let (hw, hl) = (d.half_width(), d.half_length());

    out.push(floor_patch(
        CourtFeature::Floor,
        Vec3::ZERO,
        Vec2::new(d.width, d.length),
        CourtColor::White,
    ));

    for side in [CourtSide::Left, CourtSide::Right] {
        let x = side.sign() * hw;
        let rotation = side_wall_rotation(side);
        out.push(SurfaceDescriptor {
            feature: CourtFeature::SideWall(side),
            position: Vec3::new(x, d.height / 2.0, 0.0),
            rotation,
            extent: Vec2::new(d.length, d.height),
            color: CourtColor::White,
            side: Side::Back,
        });
        out.push(SurfaceDescriptor {
            feature: CourtFeature::SideWallOutBand(side),
            position: Vec3::new(x, d.height, 0.0),
            rotation,
            extent: Vec2::new(d.length, OUT_BAND_HEIGHT),
            color: CourtColor::White,
            side: Side::Back,
        });
    }

    out.push(front_wall_panel(
        CourtFeature::FrontWall,
        Vec3::new(0.0, d.height / 2.0, -hl),
        Vec2::new(d.width, d.height),
        CourtColor::White,
    ));
    out.push(front_wall_panel(
        CourtFeature::FrontWallOutBand,
        Vec3::new(0.0, d.out_line_height, -hl),
        Vec2::new(d.width, OUT_BAND_HEIGHT),
        CourtColor::White,
    ));

    let back_height = d.back_wall_height();
    out.push(SurfaceDescriptor {
        feature: CourtFeature::BackWall,
        position: Vec3::new(0.0, back_height / 2.0, hl),
        rotation: Vec3::new(0.0, PI, 0.0),
        extent: Vec2::new(d.width, back_height),
        color: CourtColor::White,
        side: Side::Front,
    });
}

fn push_diagonals(out: &mut Vec<SurfaceDescriptor>, d: &CourtDimensions) {
    let angle = d.diagonal_angle();
    let y = d.height - d.back_wall_cutout / 2.0;

    for side in [CourtSide::Right, CourtSide::Left] {
        let mut rotation = side_wall_rotation(side);
        // The two side walls face opposite ways, so the same fall towards
        // the back wall needs opposite roll.
        rotation.z = match side {
            CourtSide::Right => angle,
            CourtSide::Left => -angle,
        };
        out.push(SurfaceDescriptor {
            feature: CourtFeature::SideWallDiagonal(side),
            position: Vec3::new(side.sign() * (d.half_width() - WALL_OFFSET), y, 0.0),
            rotation,
            extent: Vec2::new(d.diagonal_length(), MARKING_WIDTH),
            color: CourtColor::Red,
            side: Side::Back,
        });
    }
}

fn push_floor_markings(out: &mut Vec<SurfaceDescriptor>, d: &CourtDimensions) {
    let hl = d.half_length();
    let short_z = d.short_line_z();

    out.push(floor_patch(
        CourtFeature::ShortLine,
        Vec3::new(0.0, FLOOR_OFFSET, short_z),
        Vec2::new(d.width, MARKING_WIDTH),
        CourtColor::Red,
    ));
    out.push(floor_patch(
        CourtFeature::HalfCourtLine,
        Vec3::new(0.0, FLOOR_OFFSET, hl - d.half_court_line_length / 2.0),
        Vec2::new(MARKING_WIDTH, d.half_court_line_length),
        CourtColor::Red,
    ));

    let (bw, bd) = (d.service_box_width, d.service_box_depth);
    for side in [CourtSide::Left, CourtSide::Right] {
        let s = side.sign();
        let box_center_x = s * (d.half_width() - bw / 2.0);
        let box_center_z = short_z + bd / 2.0;

        out.push(floor_patch(
            CourtFeature::ServiceBox(side),
            Vec3::new(box_center_x, FLOOR_FILL_OFFSET, box_center_z),
            Vec2::new(bw, bd),
            CourtColor::ServiceBoxTint,
        ));
        // Rear edge of the box; the front edge is the short line.
        out.push(floor_patch(
            CourtFeature::ServiceBoxOutline(side),
            Vec3::new(box_center_x, FLOOR_OFFSET, short_z + bd),
            Vec2::new(bw, MARKING_WIDTH),
            CourtColor::Red,
        ));
        // Inner edge of the box; the outer edge is the side wall.
        out.push(floor_patch(
            CourtFeature::ServiceBoxOutline(side),
            Vec3::new(s * (d.half_width() - bw), FLOOR_OFFSET, box_center_z),
            Vec2::new(MARKING_WIDTH, bd + MARKING_WIDTH),
            CourtColor::Red,
        ));
    }
}

fn push_front_wall_markings(out: &mut Vec<SurfaceDescriptor>, d: &CourtDimensions) {
    let z = -d.half_length() + WALL_OFFSET;
    let bands = [
        (CourtFeature::Tin, d.tin_height),
        (CourtFeature::ServiceLine, d.service_line_height),
        (CourtFeature::OutLine, d.out_line_height),
    ];
    for (feature, height) in bands {
        out.push(front_wall_panel(
            feature,
            Vec3::new(0.0, height, z),
            Vec2::new(d.width, MARKING_WIDTH),
            CourtColor::Red,
        ));
    }
}

fn edges(d: &CourtDimensions) -> Vec<EdgeLineDescriptor> {
    let (hw, hl) = (d.half_width(), d.half_length());
    let y = FLOOR_OFFSET;
    // Corner uprights sit just inside the walls.
    let (cx, cz) = (hw - FLOOR_OFFSET, hl - FLOOR_OFFSET);

    let line = |start: Vec3, end: Vec3| EdgeLineDescriptor {
        start,
        end,
        color: CourtColor::Black,
    };

    vec![
        // Floor: left, front, right, back
        line(Vec3::new(-hw, y, -hl), Vec3::new(-hw, y, hl)),
        line(Vec3::new(-hw, y, -hl), Vec3::new(hw, y, -hl)),
        line(Vec3::new(hw, y, hl), Vec3::new(hw, y, -hl)),
        line(Vec3::new(-hw, y, hl), Vec3::new(hw, y, hl)),
        // Front corners
        line(Vec3::new(-cx, y, -cz), Vec3::new(-cx, d.height, -cz)),
        line(Vec3::new(cx, y, -cz), Vec3::new(cx, d.height, -cz)),
        // Back corners, up to the top of the back wall
        line(Vec3::new(-cx, y, cz), Vec3::new(-cx, d.back_wall_height(), cz)),
        line(Vec3::new(cx, y, cz), Vec3::new(cx, d.back_wall_height(), cz)),
    ]
}

fn labels(d: &CourtDimensions) -> Vec<LabelDescriptor> {
    let (hw, hl) = (d.half_width(), d.half_length());
    let short_z = d.short_line_z();

    let mut out = Vec::with_capacity(LABEL_COUNT);

    // Text on a side wall faces back into the court.
    for (side, text, yaw) in [
        (CourtSide::Left, "SIDE WALL (LEFT)", -PI * 1.5),
        (CourtSide::Right, "SIDE WALL (RIGHT)", -FRAC_PI_2),
    ] {
        out.push(LabelDescriptor {
            feature: CourtFeature::SideWall(side),
            text,
            position: Vec3::new(side.sign() * (hw - LABEL_OFFSET), d.height / 2.0, 0.0),
            rotation: Vec3::new(0.0, yaw, 0.0),
            font_size: WALL_FONT_SIZE,
        });
    }

    out.push(LabelDescriptor {
        feature: CourtFeature::FrontWall,
        text: "FRONT WALL",
        position: Vec3::new(0.0, d.height / 2.0 + 1.0, -hl + LABEL_OFFSET),
        rotation: Vec3::ZERO,
        font_size: WALL_FONT_SIZE,
    });
    out.push(LabelDescriptor {
        feature: CourtFeature::BackWall,
        text: "BACK WALL",
        position: Vec3::new(0.0, d.back_wall_height() / 2.0, hl - LABEL_OFFSET),
        rotation: Vec3::new(0.0, PI, 0.0),
        font_size: WALL_FONT_SIZE,
    });

    out.push(LabelDescriptor {
        feature: CourtFeature::ShortLine,
        text: "SHORT LINE",
        // Just in front of the line, on the front-wall side
        position: Vec3::new(0.0, FLOOR_OFFSET, short_z - 0.24),
        rotation: FLOOR_TEXT_ROTATION,
        font_size: MARKING_FONT_SIZE,
    });
    out.push(LabelDescriptor {
        feature: CourtFeature::HalfCourtLine,
        text: "HALF COURT LINE",
        position: Vec3::new(-0.15, FLOOR_OFFSET, hl - d.half_court_line_length / 2.0),
        rotation: Vec3::new(-FRAC_PI_2, 0.0, FRAC_PI_2),
        font_size: MARKING_FONT_SIZE,
    });

    for side in [CourtSide::Left, CourtSide::Right] {
        out.push(LabelDescriptor {
            feature: CourtFeature::ServiceBox(side),
            text: "SERVICE\nBOX",
            position: Vec3::new(
                side.sign() * (hw - d.service_box_width / 2.0),
                FLOOR_OFFSET + 0.001,
                short_z + d.service_box_depth / 2.0,
            ),
            rotation: FLOOR_TEXT_ROTATION,
            font_size: MARKING_FONT_SIZE,
        });
    }

    // Wall marking captions sit slightly above their band.
    let wall_z = -hl + WALL_OFFSET;
    out.push(LabelDescriptor {
        feature: CourtFeature::Tin,
        text: "TIN",
        position: Vec3::new(0.0, d.tin_height + 0.12, wall_z),
        rotation: Vec3::ZERO,
        font_size: MARKING_FONT_SIZE,
    });
    out.push(LabelDescriptor {
        feature: CourtFeature::ServiceLine,
        text: "SERVICE LINE",
        position: Vec3::new(0.0, d.service_line_height + 0.17, wall_z),
        rotation: Vec3::ZERO,
        font_size: MARKING_FONT_SIZE,
    });

    out
}
