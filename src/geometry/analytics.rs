// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics and statistics

use super::{BoundingBox, ObjModel};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived statistics of a model snapshot.
///
/// Never cached: compute it again after any transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryInfo {
    pub bbox: BoundingBox,
    pub size: Vector3<f64>,
    /// Bounding box midpoint
    pub origin: Point3<f64>,
    pub vertex_count: usize,
    pub face_count: usize,
    /// Face arity -> number of faces with that many corners
    pub face_arity: BTreeMap<usize, usize>,
}

impl GeometryInfo {
    pub fn min(&self) -> Point3<f64> {
        self.bbox.min
    }

    pub fn max(&self) -> Point3<f64> {
        self.bbox.max
    }

    /// Render as OBJ comment lines so the report can precede model output
    pub fn to_comment_block(&self) -> String {
        let (min, max) = (self.bbox.min, self.bbox.max);
        let mut out = String::new();

        out.push_str(&format!("# Vertex Count: {}\n", self.vertex_count));
        out.push_str(&format!("#   Face Count: {}\n", self.face_count));
        out.push_str(&format!(
            "#         Size: {{x:{:.6}, y:{:.6}, z:{:.6}}}\n",
            self.size.x, self.size.y, self.size.z
        ));
        out.push_str(&format!(
            "#       Origin: {{x:{:.6}, y:{:.6}, z:{:.6}}}\n",
            self.origin.x, self.origin.y, self.origin.z
        ));
        out.push_str(&format!("#       Extent: x: {:.6} -> {:.6}\n", min.x, max.x));
        out.push_str(&format!("#               y: {:.6} -> {:.6}\n", min.y, max.y));
        out.push_str(&format!("#               z: {:.6} -> {:.6}\n", min.z, max.z));
        out.push_str("#    Face Info:\n");
        for (arity, count) in &self.face_arity {
            out.push_str(&format!("#      {}-gon: {}\n", arity, count));
        }

        out
    }
}

/// Compute bounding box, origin, counts and face arity histogram
pub fn analyze(model: &ObjModel) -> GeometryInfo {
    let bbox = model.bounding_box();

    let mut face_arity = BTreeMap::new();
    for face in &model.faces {
        *face_arity.entry(face.arity()).or_insert(0) += 1;
    }

    GeometryInfo {
        bbox,
        size: bbox.size(),
        origin: bbox.center(),
        vertex_count: model.vertex_count(),
        face_count: model.face_count(),
        face_arity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Face, FaceVertex, Vertex};

    fn face(n: i64) -> Face {
        Face::new((0..n).map(FaceVertex::new).collect())
    }

    #[test]
    fn test_analyze_two_points() {
        let mut model = ObjModel::new();
        model.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        model.vertices.push(Vertex::new(2.0, 4.0, 6.0));

        let info = analyze(&model);

        assert_eq!(info.min(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(info.max(), Point3::new(2.0, 4.0, 6.0));
        assert_eq!(info.size, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(info.origin, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(info.vertex_count, 2);
        assert_eq!(info.face_count, 0);
        assert!(info.face_arity.is_empty());
    }

    #[test]
    fn test_face_arity_histogram() {
        let mut model = ObjModel::new();
        model.faces = vec![face(3), face(4), face(3), face(5), face(3)];

        let info = analyze(&model);

        assert_eq!(info.face_count, 5);
        assert_eq!(info.face_arity.get(&3), Some(&3));
        assert_eq!(info.face_arity.get(&4), Some(&1));
        assert_eq!(info.face_arity.get(&5), Some(&1));
    }

    #[test]
    fn test_empty_model_does_not_panic() {
        let info = analyze(&ObjModel::new());

        assert_eq!(info.vertex_count, 0);
        assert_eq!(info.min().x, f64::INFINITY);
        assert_eq!(info.max().x, f64::NEG_INFINITY);
        assert!(info.origin.y.is_nan());
    }

    #[test]
    fn test_comment_block() {
        let mut model = ObjModel::new();
        model.vertices.push(Vertex::new(-1.0, 0.0, 0.0));
        model.vertices.push(Vertex::new(1.0, 2.0, 0.5));
        model.faces.push(face(4));

        let block = analyze(&model).to_comment_block();

        assert!(block.lines().all(|line| line.starts_with('#')));
        assert!(block.contains("# Vertex Count: 2"));
        assert!(block.contains("Size: {x:2.000000, y:2.000000, z:0.500000}"));
        assert!(block.contains("Origin: {x:0.000000, y:1.000000, z:0.250000}"));
        assert!(block.contains("4-gon: 1"));
        assert!(block.starts_with("# Vertex Count: 2\n#   Face Count: 1\n"));
        assert!(block.ends_with("#    Face Info:\n#      4-gon: 1\n"));
    }
}
