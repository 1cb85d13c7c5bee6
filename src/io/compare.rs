// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model comparison utilities for round-trip checking

use crate::geometry::ObjModel;
use crate::utils::math::{approx_eq, max_abs_diff};
use serde::{Deserialize, Serialize};

/// Result of model comparison
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelComparison {
    pub vertex_count_match: bool,
    pub normal_count_match: bool,
    pub texture_count_match: bool,
    pub face_count_match: bool,
    /// Every vertex, normal and texture coordinate agrees within tolerance
    pub values_match: bool,
    /// Faces carry the same indices and presence flags
    pub faces_match: bool,
    pub material_match: bool,
    /// Largest absolute difference seen across all numeric fields
    pub max_deviation: f64,
    pub tolerance: f64,
    pub passed: bool,
}

/// Compare two models record by record
pub fn compare_models(a: &ObjModel, b: &ObjModel, tolerance: f64) -> ModelComparison {
    let mut comparison = ModelComparison {
        tolerance,
        ..Default::default()
    };

    comparison.vertex_count_match = a.vertices.len() == b.vertices.len();
    comparison.normal_count_match = a.normals.len() == b.normals.len();
    comparison.texture_count_match = a.texture_coords.len() == b.texture_coords.len();
    comparison.face_count_match = a.faces.len() == b.faces.len();

    let vertex_values = a.vertices.iter().zip(&b.vertices).map(|(va, vb)| {
        max_abs_diff(
            &[va.position.x, va.position.y, va.position.z, va.w],
            &[vb.position.x, vb.position.y, vb.position.z, vb.w],
        )
    });
    let normal_values = a
        .normals
        .iter()
        .zip(&b.normals)
        .map(|(na, nb)| max_abs_diff(na.0.as_slice(), nb.0.as_slice()));
    let texture_values = a
        .texture_coords
        .iter()
        .zip(&b.texture_coords)
        .map(|(ta, tb)| max_abs_diff(&[ta.u, ta.v, ta.w], &[tb.u, tb.v, tb.w]));

    comparison.max_deviation = vertex_values
        .chain(normal_values)
        .chain(texture_values)
        .fold(0.0, f64::max);
    comparison.values_match = approx_eq(comparison.max_deviation, 0.0, tolerance)
        || comparison.max_deviation == 0.0;

    comparison.faces_match = comparison.face_count_match && a.faces == b.faces;
    comparison.material_match = a.material == b.material;

    comparison.passed = comparison.vertex_count_match
        && comparison.normal_count_match
        && comparison.texture_count_match
        && comparison.values_match
        && comparison.faces_match
        && comparison.material_match;

    comparison
}
