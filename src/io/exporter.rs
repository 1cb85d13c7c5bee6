// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OBJ text writer

use crate::error::{ObjError, ObjResult};
use crate::geometry::{FaceVertex, ObjModel};
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the reference in file form, with 1-based indices
impl fmt::Display for FaceVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertex + 1)?;
        match (self.texture, self.normal) {
            (Some(t), Some(n)) => write!(f, "/{}/{}", t + 1, n + 1),
            (Some(t), None) => write!(f, "/{}", t + 1),
            (None, Some(n)) => write!(f, "//{}", n + 1),
            (None, None) => Ok(()),
        }
    }
}

/// Renders the whole model as OBJ text.
///
/// Blocks come in a fixed order separated by blank lines: vertices, texture
/// coordinates, normals, faces. Every number is printed with six decimals.
impl fmt::Display for ObjModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            let p = vertex.position;
            if vertex.has_explicit_w() {
                writeln!(f, "v {:.6} {:.6} {:.6} {:.6}", p.x, p.y, p.z, vertex.w)?;
            } else {
                writeln!(f, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
            }
        }
        writeln!(f)?;

        for coord in &self.texture_coords {
            if coord.has_explicit_w() {
                writeln!(f, "vt {:.6} {:.6} {:.6}", coord.u, coord.v, coord.w)?;
            } else {
                writeln!(f, "vt {:.6} {:.6}", coord.u, coord.v)?;
            }
        }
        writeln!(f)?;

        for normal in &self.normals {
            let n = normal.0;
            writeln!(f, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        }
        writeln!(f)?;

        if self.has_material() {
            writeln!(f, "usemtl {}", self.material)?;
        }
        for face in &self.faces {
            write!(f, "f")?;
            for corner in &face.vertices {
                write!(f, " {}", corner)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Write a model as OBJ text to any writer
pub fn write_obj<W: Write>(model: &ObjModel, mut writer: W) -> ObjResult<()> {
    write!(writer, "{}", model).map_err(ObjError::Write)?;
    writer.flush().map_err(ObjError::Write)
}

/// Export a model to an OBJ file
pub fn export_obj_file(model: &ObjModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create OBJ file: {:?}", path))?;

    write_obj(model, BufWriter::new(file))
        .with_context(|| format!("Failed to write OBJ file: {:?}", path))?;

    tracing::debug!(?path, vertices = model.vertex_count(), "exported OBJ file");
    Ok(())
}
