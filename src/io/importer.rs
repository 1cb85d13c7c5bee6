// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OBJ file importer

use crate::geometry::ObjModel;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open an .obj file and parse it into a model
pub fn import_obj_file(path: impl AsRef<Path>) -> Result<ObjModel> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open OBJ file: {:?}", path))?;

    super::parse_obj(BufReader::new(file))
        .with_context(|| format!("Failed to parse OBJ file: {:?}", path))
}
