// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! objtool
//!
//! Reads Wavefront OBJ models, reports their geometry, applies a fixed
//! pipeline of edits (material, triangulation, scaling, resizing, centering,
//! ground alignment) and writes them back out as OBJ text.
//!
//! ```
//! use objtool::{config::TransformConfig, io};
//!
//! let mut model = io::parse_obj_str("v 0 0 0\nv 2 4 6\nv 2 0 0\nv 0 4 0\nf 1 3 2 4\n").unwrap();
//! let config = TransformConfig { triangulate: true, ground: true, ..Default::default() };
//! objtool::geometry::apply(&mut model, &config);
//! assert_eq!(model.face_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use config::TransformConfig;
pub use error::{ObjError, ObjResult};
pub use geometry::{analyze, GeometryInfo, ObjModel};
pub use io::{import_obj_file, parse_obj, parse_obj_str, write_obj};

use std::io::{BufRead, Write};

/// Summary of one pass through [`process`]
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// Geometry before any edit
    pub before: GeometryInfo,
    /// Geometry after the edits
    pub after: GeometryInfo,
    pub steps: Vec<geometry::TransformStep>,
}

/// Parse `reader`, apply `config` and write the result to `writer`.
///
/// When `info_header` is set the pre-transform report is written first as
/// OBJ comments.
pub fn process<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &TransformConfig,
    info_header: bool,
) -> ObjResult<ProcessReport> {
    let mut model = parse_obj(reader)?;
    let before = analyze(&model);

    if info_header {
        writer
            .write_all(before.to_comment_block().as_bytes())
            .map_err(ObjError::Write)?;
        writeln!(writer).map_err(ObjError::Write)?;
    }

    let steps = geometry::apply(&mut model, config);
    let after = analyze(&model);
    write_obj(&model, writer)?;

    Ok(ProcessReport {
        before,
        after,
        steps,
    })
}
