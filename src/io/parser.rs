// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line-oriented OBJ parser

use crate::error::{ObjError, ObjResult};
use crate::geometry::{Face, FaceVertex, ObjModel, TextureCoord, Vertex, VertexNormal};
use std::borrow::Cow;
use std::io::BufRead;

/// Parse an OBJ stream into a model.
///
/// Lines are dispatched on their prefix, most specific first: `vn`, `vt`,
/// `v`, `f`, then `usemtl`. Anything else, including blank lines and
/// comments, is skipped without being decoded, so it need not be UTF-8. The
/// first malformed line aborts the parse and no partial model is returned.
pub fn parse_obj<R: BufRead>(mut reader: R) -> ObjResult<ObjModel> {
    let mut model = ObjModel::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        line_no += 1;
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ObjError::Read {
                line: line_no,
                source,
            })?;
        if read == 0 {
            break;
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        parse_line(&mut model, line, line_no)?;
    }

    tracing::debug!(
        vertices = model.vertices.len(),
        normals = model.normals.len(),
        texture_coords = model.texture_coords.len(),
        faces = model.faces.len(),
        "parsed OBJ model"
    );

    Ok(model)
}

/// Parse OBJ source held in memory
pub fn parse_obj_str(source: &str) -> ObjResult<ObjModel> {
    parse_obj(source.as_bytes())
}

fn parse_line(model: &mut ObjModel, line: &[u8], line_no: usize) -> ObjResult<()> {
    if let Some(rest) = line.strip_prefix(b"vn") {
        // values past the third are ignored
        let n = parse_numbers(&decode(rest), "vn", 3, line_no)?;
        model.normals.push(VertexNormal::new(n[0], n[1], n[2]));
    } else if let Some(rest) = line.strip_prefix(b"vt") {
        let n = parse_numbers(&decode(rest), "vt", 2, line_no)?;
        let coord = match n.get(2) {
            Some(&w) => TextureCoord::with_w(n[0], n[1], w),
            None => TextureCoord::new(n[0], n[1]),
        };
        model.texture_coords.push(coord);
    } else if let Some(rest) = line.strip_prefix(b"v") {
        let n = parse_numbers(&decode(rest), "v", 3, line_no)?;
        let vertex = match n.get(3) {
            Some(&w) => Vertex::with_w(n[0], n[1], n[2], w),
            None => Vertex::new(n[0], n[1], n[2]),
        };
        model.vertices.push(vertex);
    } else if let Some(rest) = line.strip_prefix(b"f") {
        let rest = decode(rest);
        let vertices = fields(&rest)
            .into_iter()
            .map(|token| parse_face_vertex(token, line_no))
            .collect::<ObjResult<Vec<_>>>()?;
        model.faces.push(Face::new(vertices));
    } else if let Some(rest) = line.strip_prefix(b"usemtl") {
        model.material = trim(&decode(rest)).to_string();
    } else {
        tracing::trace!(line = line_no, "skipping unrecognized line");
    }

    Ok(())
}

/// Lossy decode; invalid bytes become U+FFFD, which no number or index accepts
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split the remainder of a record on single spaces
fn fields(rest: &str) -> Vec<&str> {
    let rest = trim(rest);
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(' ').collect()
    }
}

/// Parse every field as `f64` and demand at least `expected` of them
fn parse_numbers(
    rest: &str,
    record: &'static str,
    expected: usize,
    line: usize,
) -> ObjResult<Vec<f64>> {
    let numbers = fields(rest)
        .into_iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ObjError::MalformedNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect::<ObjResult<Vec<_>>>()?;

    if numbers.len() < expected {
        return Err(ObjError::InsufficientFields {
            line,
            record,
            expected,
            found: numbers.len(),
        });
    }

    Ok(numbers)
}

/// Parse `v`, `v/t`, `v//n` or `v/t/n`, converting to zero-based indices
fn parse_face_vertex(token: &str, line: usize) -> ObjResult<FaceVertex> {
    let malformed = || ObjError::MalformedIndex {
        line,
        token: token.to_string(),
    };
    let index = |field: &str| -> ObjResult<i64> {
        field
            .parse::<i64>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(malformed)
    };

    let mut parts = token.split('/');
    let mut face_vertex = FaceVertex::new(index(parts.next().unwrap_or_default())?);

    if let Some(texture) = parts.next() {
        if !texture.is_empty() {
            face_vertex.texture = Some(index(texture)?);
        }
    }
    if let Some(normal) = parts.next() {
        face_vertex.normal = Some(index(normal)?);
    }
    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(face_vertex)
}
