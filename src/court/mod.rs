//! Court Geometry Model
//!
//! - [`CourtDimensions`]: regulation measurements and their validation
//! - [`build_court`]: pure builder producing a [`CourtLayout`]
//! - Descriptor types consumed read-only by a renderer

pub mod builder;
pub mod descriptors;
pub mod dimensions;

pub use builder::{EDGE_COUNT, LABEL_COUNT, SURFACE_COUNT, build_court};
pub use descriptors::{
    CourtColor, CourtFeature, CourtLayout, CourtSide, EdgeLineDescriptor, LabelDescriptor, Side,
    SurfaceDescriptor,
};
pub use dimensions::CourtDimensions;
