//! Type description files
//!
//! A description file states everything the generator needs to know about
//! a target type: its name, namespace, lineage, and serialized fields with
//! their annotations. TOML is the default format; files ending in `.json`
//! are read as JSON.

use anyhow::{Context, Result};
use editorgen_codegen::{Generation, is_eligible, select_serialized_fields};
use editorgen_core::{
    Annotation, DeferredKind, FieldDescription, GenerationResult, Notice, TypeDescription,
    Visibility,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unity's default `[Space]` height
const DEFAULT_SPACE_HEIGHT: f32 = 8.0;

/// Description file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Description {
    pub name: String,

    #[serde(default)]
    pub namespace: Option<String>,

    /// Ancestors, nearest first
    #[serde(default)]
    pub lineage: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub visibility: VisibilityEntry,

    #[serde(default)]
    pub annotations: Vec<AnnotationEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityEntry {
    #[default]
    Public,
    #[serde(alias = "private", alias = "protected", alias = "internal")]
    NonPublic,
}

/// One annotation, `{ kind = "...", ... }`
///
/// Parameters are optional at parse time and checked per kind when the
/// entry is converted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationEntry {
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

impl Description {
    /// Load a description from a file, picking the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read description: {:?}", path))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse description")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse description")
    }

    /// Convert into the generator's model
    pub fn into_type(self) -> Result<TypeDescription> {
        let fields = self
            .fields
            .into_iter()
            .map(FieldEntry::into_field)
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeDescription {
            name: self.name,
            namespace: self.namespace,
            lineage: self.lineage,
            fields,
        })
    }
}

impl FieldEntry {
    fn into_field(self) -> Result<FieldDescription> {
        let annotations = self
            .annotations
            .iter()
            .map(|entry| {
                entry
                    .to_annotation()
                    .with_context(|| format!("Invalid annotation on field '{}'", self.name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FieldDescription {
            name: self.name,
            ty: self.ty,
            visibility: match self.visibility {
                VisibilityEntry::Public => Visibility::Public,
                VisibilityEntry::NonPublic => Visibility::NonPublic,
            },
            annotations,
        })
    }
}

impl AnnotationEntry {
    /// Map the entry onto an [`Annotation`]
    ///
    /// Unknown kinds are kept as [`Annotation::Unrecognized`] so the
    /// generator can report them.
    pub fn to_annotation(&self) -> Result<Annotation> {
        let annotation = match self.kind.as_str() {
            "serialize_field" => Annotation::SerializeMarker,
            "non_serialized" => Annotation::NonSerializedMarker,
            "header" => Annotation::Header(self.require_text()?),
            "tooltip" => Annotation::Tooltip(self.require_text()?),
            "space" => Annotation::Space(self.height.unwrap_or(DEFAULT_SPACE_HEIGHT)),
            "range" => {
                let (Some(min), Some(max)) = (self.min, self.max) else {
                    anyhow::bail!("'range' requires both 'min' and 'max'");
                };
                if min > max {
                    anyhow::bail!("'range' min {} is greater than max {}", min, max);
                }
                Annotation::Range { min, max }
            }
            other => match DeferredKind::from_name(other) {
                Some(kind) => Annotation::Deferred(kind),
                None if other.is_empty() => anyhow::bail!("Annotation kind cannot be empty"),
                None => Annotation::Unrecognized(other.to_string()),
            },
        };

        Ok(annotation)
    }

    fn require_text(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("'{}' requires 'text'", self.kind),
        }
    }
}

/// Outcome of a dry run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub type_name: String,
    pub selected: usize,
    pub notices: Vec<Notice>,
}

/// Run the build half of a generation request without rendering
pub fn inspect(target: &TypeDescription) -> GenerationResult<CheckReport> {
    let mut notices = Vec::new();
    let mut generation = Generation::new();
    generation.build(Some(target), &mut notices)?;

    Ok(CheckReport {
        type_name: target.qualified_name(),
        selected: select_serialized_fields(Some(target))?.len(),
        notices,
    })
}

/// Check command implementation
pub fn check(path: &Path) -> Result<()> {
    println!("Checking description: {}", path.display());

    let target = Description::from_file(path)?.into_type()?;

    if !is_eligible(&target) {
        println!("✗ {} is not eligible", target.qualified_name());
    }
    let report = inspect(&target)?;

    println!("✓ Type: {} (eligible)", report.type_name);
    println!("✓ Serialized fields: {}", report.selected);
    println!("✓ Notices: {}", report.notices.len());
    for notice in &report.notices {
        println!("  - {}", notice);
    }
    println!("\nDescription is valid!");

    Ok(())
}
