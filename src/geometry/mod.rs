// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - OBJ model representation, analysis and transforms

mod analytics;
mod bbox;
mod model;
mod transform;
mod triangulate;

pub use analytics::{analyze, GeometryInfo};
pub use bbox::BoundingBox;
pub use model::{
    Face, FaceVertex, ObjModel, TextureCoord, Vertex, VertexNormal, DEFAULT_TEXTURE_W,
    DEFAULT_VERTEX_W,
};
pub use transform::{
    align_to_ground, apply, apply_step, center_on_origin, resize_axis, scale_about_center, Axis,
    TransformStep,
};
pub use triangulate::{triangulate, triangulate_face};
