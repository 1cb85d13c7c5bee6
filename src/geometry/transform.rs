// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! In-place model edits driven by a [`TransformConfig`]
//!
//! Geometric steps only rewrite vertex positions. Normals and texture
//! coordinates are left as they are, so a non-uniform result (several axis
//! resizes in a row) leaves stale normals behind.
//!
//! Nothing here fails. A zero extent or an empty model yields infinities or
//! NaNs in the vertex data, which are passed through unchanged.

use super::{analyze, triangulate, ObjModel};
use crate::config::{CenterAxes, TransformConfig};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A single model edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformStep {
    SetMaterial(String),
    Triangulate,
    /// Uniform scale about the bounding box center
    Scale(f64),
    /// Uniform scale about the center so `axis` spans `target`
    Resize { axis: Axis, target: f64 },
    Center(CenterAxes),
    AlignGround,
}

/// Apply every step of `config` in order and return what ran
pub fn apply(model: &mut ObjModel, config: &TransformConfig) -> Vec<TransformStep> {
    let steps = config.plan();
    for step in &steps {
        apply_step(model, step);
    }
    steps
}

/// Apply a single step
pub fn apply_step(model: &mut ObjModel, step: &TransformStep) {
    tracing::debug!(?step, vertices = model.vertex_count(), "applying transform");

    match step {
        TransformStep::SetMaterial(name) => model.material = name.clone(),
        TransformStep::Triangulate => {
            let before = model.face_count();
            model.faces = triangulate(&model.faces);
            tracing::debug!(before, after = model.face_count(), "triangulated faces");
        }
        TransformStep::Scale(factor) => scale_about_center(model, *factor),
        TransformStep::Resize { axis, target } => resize_axis(model, *axis, *target),
        TransformStep::Center(axes) => center_on_origin(model, *axes),
        TransformStep::AlignGround => align_to_ground(model),
    }
}

/// Scale uniformly about the bounding box center; 1.0 is a no-op
pub fn scale_about_center(model: &mut ObjModel, factor: f64) {
    if factor == 1.0 {
        return;
    }
    let info = analyze(model);
    model.scale_about(&info.origin, factor);
}

/// Scale all axes by `target / current extent of axis`, about the center
pub fn resize_axis(model: &mut ObjModel, axis: Axis, target: f64) {
    let info = analyze(model);
    let ratio = target / info.size[axis.index()];
    model.scale_about(&info.origin, ratio);
}

/// Translate so the center of each selected axis lands on zero
pub fn center_on_origin(model: &mut ObjModel, axes: CenterAxes) {
    let origin = analyze(model).origin;
    let component = |axis: Axis| {
        if axes.contains(axis) {
            -origin[axis.index()]
        } else {
            0.0
        }
    };
    let offset = Vector3::new(component(Axis::X), component(Axis::Y), component(Axis::Z));
    model.translate(&offset);
}

/// Translate along y so the lowest vertex sits at y = 0
pub fn align_to_ground(model: &mut ObjModel) {
    let info = analyze(model);
    model.translate(&Vector3::new(0.0, -info.min().y, 0.0));
}
