// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polygon fan triangulation

use super::Face;

/// Split a face into a fan of triangles `(0, i, i + 1)`.
///
/// A triangle comes back unchanged and faces with fewer than three corners
/// produce nothing. Fans are exact for convex polygons only.
pub fn triangulate_face(face: &Face) -> Vec<Face> {
    let corners = &face.vertices;
    if corners.len() < 3 {
        return Vec::new();
    }

    (1..corners.len() - 1)
        .map(|i| Face::new(vec![corners[0], corners[i], corners[i + 1]]))
        .collect()
}

/// Triangulate every face, keeping face order
pub fn triangulate(faces: &[Face]) -> Vec<Face> {
    faces.iter().flat_map(triangulate_face).collect()
}
