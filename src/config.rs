// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transform configuration

use crate::geometry::{Axis, TransformStep};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "objtool.toml";

/// Target extents for axis resizing; `None` or 0 leaves the axis alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTargets {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl AxisTargets {
    /// Requested extent for `axis`, treating 0 as unset
    pub fn get(&self, axis: Axis) -> Option<f64> {
        let target = match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        };
        target.filter(|t| *t != 0.0)
    }
}

/// Axes to center on the origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl CenterAxes {
    pub fn all() -> Self {
        Self {
            x: true,
            y: true,
            z: true,
        }
    }

    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Which edits to apply to a model.
///
/// Edits always run in the order produced by [`TransformConfig::plan`],
/// whatever order they were requested in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Material name to stamp on the model; empty or missing means keep
    pub material: Option<String>,
    /// Split polygons into triangles
    pub triangulate: bool,
    /// Uniform scale about the bounding box center; 1.0 leaves the model as is
    pub scale: f64,
    /// Resize so the given axis spans the target extent
    pub resize: AxisTargets,
    /// Center selected axes on the origin
    pub center: CenterAxes,
    /// Rest the lowest point on y = 0
    pub ground: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            material: None,
            triangulate: false,
            scale: 1.0,
            resize: AxisTargets::default(),
            center: CenterAxes::default(),
            ground: false,
        }
    }
}

impl TransformConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: TransformConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `path`, else `objtool.toml` in the working directory, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if PathBuf::from(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Material to apply, ignoring an empty name
    pub fn material_name(&self) -> Option<&str> {
        self.material.as_deref().filter(|name| !name.is_empty())
    }

    /// Operations to run, in their fixed order
    pub fn plan(&self) -> Vec<TransformStep> {
        let mut steps = Vec::new();

        if let Some(name) = self.material_name() {
            steps.push(TransformStep::SetMaterial(name.to_string()));
        }
        if self.triangulate {
            steps.push(TransformStep::Triangulate);
        }
        if self.scale != 1.0 {
            steps.push(TransformStep::Scale(self.scale));
        }
        for axis in Axis::ALL {
            if let Some(target) = self.resize.get(axis) {
                steps.push(TransformStep::Resize { axis, target });
            }
        }
        if self.center.any() {
            steps.push(TransformStep::Center(self.center));
        }
        if self.ground {
            steps.push(TransformStep::AlignGround);
        }

        steps
    }

    /// True when applying this config changes nothing
    pub fn is_identity(&self) -> bool {
        self.plan().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_identity() {
        let config = TransformConfig::default();
        assert!(config.is_identity());
        assert_eq!(config.scale, 1.0);
    }

    #[test]
    fn test_empty_material_is_unset() {
        let config = TransformConfig {
            material: Some(String::new()),
            ..Default::default()
        };
        assert!(config.material_name().is_none());
        assert!(config.is_identity());
    }

    #[test]
    fn test_plan_order_is_fixed() {
        let config = TransformConfig {
            material: Some("steel".into()),
            triangulate: true,
            scale: 2.0,
            resize: AxisTargets {
                x: None,
                y: Some(10.0),
                z: Some(4.0),
            },
            center: CenterAxes {
                x: true,
                ..Default::default()
            },
            ground: true,
        };

        assert_eq!(
            config.plan(),
            vec![
                TransformStep::SetMaterial("steel".into()),
                TransformStep::Triangulate,
                TransformStep::Scale(2.0),
                TransformStep::Resize {
                    axis: Axis::Y,
                    target: 10.0
                },
                TransformStep::Resize {
                    axis: Axis::Z,
                    target: 4.0
                },
                TransformStep::Center(CenterAxes {
                    x: true,
                    y: false,
                    z: false
                }),
                TransformStep::AlignGround,
            ]
        );
    }

    #[test]
    fn test_zero_resize_target_is_unset() -> Result<()> {
        let config: TransformConfig = toml::from_str("[resize]\nx = 0.0\nz = 3.0\n")?;

        assert_eq!(config.resize.get(Axis::X), None);
        assert_eq!(
            config.plan(),
            vec![TransformStep::Resize {
                axis: Axis::Z,
                target: 3.0
            }]
        );
        Ok(())
    }

    #[test]
    fn test_toml_roundtrip() -> Result<()> {
        let config = TransformConfig {
            triangulate: true,
            scale: 0.5,
            center: CenterAxes::all(),
            resize: AxisTargets {
                x: Some(3.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let file = NamedTempFile::new()?;
        config.save(file.path())?;
        let loaded = TransformConfig::from_file(file.path())?;

        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_toml_uses_defaults() -> Result<()> {
        let config: TransformConfig = toml::from_str("ground = true\n[resize]\ny = 2.5\n")?;

        assert!(config.ground);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.resize.y, Some(2.5));
        assert_eq!(config.resize.x, None);
        assert!(!config.center.any());
        Ok(())
    }
}
