// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! In-memory OBJ model

use super::BoundingBox;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Homogeneous weight given to vertices that do not state one
pub const DEFAULT_VERTEX_W: f64 = 1.0;

/// Depth given to texture coordinates that do not state one
pub const DEFAULT_TEXTURE_W: f64 = 0.0;

/// Geometric vertex (`v x y z [w]`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub w: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w: DEFAULT_VERTEX_W,
        }
    }

    pub fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w,
        }
    }

    /// True when `w` differs from the implicit 1.0 and must be written out
    pub fn has_explicit_w(&self) -> bool {
        self.w != DEFAULT_VERTEX_W
    }
}

/// Vertex normal (`vn x y z`), kept exactly as read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexNormal(pub Vector3<f64>);

impl VertexNormal {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
}

/// Texture coordinate (`vt u v [w]`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureCoord {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl TextureCoord {
    pub fn new(u: f64, v: f64) -> Self {
        Self {
            u,
            v,
            w: DEFAULT_TEXTURE_W,
        }
    }

    pub fn with_w(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    pub fn has_explicit_w(&self) -> bool {
        self.w != DEFAULT_TEXTURE_W
    }
}

/// One corner of a face.
///
/// Indices are zero-based. The parser subtracts one from every index it reads
/// and the exporter adds it back, so negative (relative) file indices survive
/// a round trip unchanged even though they are never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceVertex {
    pub vertex: i64,
    pub texture: Option<i64>,
    pub normal: Option<i64>,
}

impl FaceVertex {
    pub fn new(vertex: i64) -> Self {
        Self {
            vertex,
            texture: None,
            normal: None,
        }
    }

    pub fn with_texture(mut self, texture: i64) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_normal(mut self, normal: i64) -> Self {
        self.normal = Some(normal);
        self
    }
}

/// Polygon face; corner order defines winding
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<FaceVertex>,
}

impl Face {
    pub fn new(vertices: Vec<FaceVertex>) -> Self {
        Self { vertices }
    }

    /// Number of corners
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }
}

/// A parsed OBJ document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjModel {
    pub vertices: Vec<Vertex>,
    pub normals: Vec<VertexNormal>,
    pub texture_coords: Vec<TextureCoord>,
    pub faces: Vec<Face>,
    /// Material name; empty when unset
    pub material: String,
}

impl ObjModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn has_material(&self) -> bool {
        !self.material.is_empty()
    }

    /// Compute bounding box over vertex positions
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Move every vertex by `offset`; `w`, normals and texture coordinates are untouched
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Multiply every vertex position by `factor` about the coordinate origin
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Scale about `center`: move it to the origin, scale, move back
    pub fn scale_about(&mut self, center: &Point3<f64>, factor: f64) {
        let offset = center.coords;
        self.translate(&-offset);
        self.scale(factor);
        self.translate(&offset);
    }
}
