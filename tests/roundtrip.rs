// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parse → serialize → parse round-trip tests

use anyhow::Result;
use objtool::io::{compare_models, export_obj_file, import_obj_file, parse_obj_str};
use objtool::ObjModel;
use tempfile::NamedTempFile;

const CUBE: &str = "\
# unit cube with normals and uvs
v -0.5 -0.5 0.5
v 0.5 -0.5 0.5
v -0.5 0.5 0.5
v 0.5 0.5 0.5
v -0.5 0.5 -0.5
v 0.5 0.5 -0.5
v -0.5 -0.5 -0.5
v 0.5 -0.5 -0.5 1.5

vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vt 1.0 1.0 0.5

vn 0.0 0.0 1.0
vn 0.0 1.0 0.0
vn 0.0 0.0 -1.0
vn 0.0 -1.0 0.0
vn 1.0 0.0 0.0
vn -1.0 0.0 0.0

usemtl painted
f 1/1/1 2/2/1 4/4/1 3/3/1
f 3/1/2 4/2/2 6/4/2 5/3/2
f 5//3 6//3 8//3 7//3
f 7/1 8/2 2/4 1/3
f 2 8 6 4
f 7/1/6 1/2/6 3/4/6 5/3/6
";

fn reparse(model: &ObjModel) -> Result<ObjModel> {
    Ok(parse_obj_str(&model.to_string())?)
}

#[test]
fn test_roundtrip_preserves_model() -> Result<()> {
    let original = parse_obj_str(CUBE)?;
    let reparsed = reparse(&original)?;

    let comparison = compare_models(&original, &reparsed, 1e-6);
    assert!(comparison.passed, "{:?}", comparison);
    assert_eq!(reparsed.faces, original.faces);
    assert_eq!(reparsed.material, "painted");

    Ok(())
}

#[test]
fn test_serialization_is_stable() -> Result<()> {
    let first = parse_obj_str(CUBE)?.to_string();
    let second = reparse(&parse_obj_str(&first)?)?.to_string();

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_optional_components_survive() -> Result<()> {
    let model = reparse(&parse_obj_str(CUBE)?)?;

    assert_eq!(model.vertices[7].w, 1.5);
    assert_eq!(model.vertices[0].w, 1.0);
    assert_eq!(model.texture_coords[3].w, 0.5);
    assert_eq!(model.texture_coords[0].w, 0.0);

    let text = model.to_string();
    assert!(text.contains("v 0.500000 -0.500000 -0.500000 1.500000\n"));
    assert!(text.contains("vt 1.000000 1.000000 0.500000\n"));
    assert!(text.contains("vt 0.000000 0.000000\n"));
    Ok(())
}

#[test]
fn test_face_indices_written_one_based() -> Result<()> {
    let model = parse_obj_str(CUBE)?;
    assert_eq!(model.faces[0].vertices[0].vertex, 0);

    let text = model.to_string();
    assert!(text.contains("f 1/1/1 2/2/1 4/4/1 3/3/1\n"));
    assert!(text.contains("f 5//3 6//3 8//3 7//3\n"));
    assert!(text.contains("f 7/1 8/2 2/4 1/3\n"));
    assert!(text.contains("f 2 8 6 4\n"));
    Ok(())
}

#[test]
fn test_precision_is_six_decimals() -> Result<()> {
    let model = parse_obj_str("v 0.1234567 1e-9 -2.0000004\n")?;
    let text = model.to_string();
    assert!(text.starts_with("v 0.123457 0.000000 -2.000000\n"));

    let reparsed = parse_obj_str(&text)?;
    assert!(compare_models(&model, &reparsed, 1e-6).passed);
    Ok(())
}

#[test]
fn test_file_roundtrip() -> Result<()> {
    let original = parse_obj_str(CUBE)?;

    let file = NamedTempFile::with_suffix(".obj")?;
    export_obj_file(&original, file.path())?;
    let loaded = import_obj_file(file.path())?;

    assert!(compare_models(&original, &loaded, 1e-6).passed);
    Ok(())
}
