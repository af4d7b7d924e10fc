//! Generation requests: validation, AST assembly, and rendering.
//!
//! A [`Generation`] walks one request through [`GenerationState`]:
//!
//! ```text
//! Idle → Validating → Building → Built → Rendered
//!             │                    └──→ Cancelled
//!             └──→ Failed
//! ```
//!
//! Every request gets a fresh `Generation`; nothing carries over between
//! requests.

use crate::annotation::map_field;
use crate::ast::{
    Access, AttributeDecl, ClassDecl, CompilationUnit, Expr, Member, MethodDecl, Stmt,
};
use crate::csharp;
use crate::introspect::select_serialized_fields;
use crate::naming;
use editorgen_core::{
    GenerationError, GenerationResult, GenerationState, NoticeSink, TypeDescription,
};
use std::path::{Path, PathBuf};

/// Base types a target must derive from.
pub const ELIGIBLE_BASES: [&str; 2] = ["UnityEngine.MonoBehaviour", "UnityEngine.ScriptableObject"];

/// Imports of every generated editor, in output order.
pub const IMPORTS: [&str; 2] = ["UnityEditor", "UnityEngine"];

/// Base type of every generated editor.
pub const EDITOR_BASE: &str = "UnityEditor.Editor";

/// Where rendered source should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A directory; the suggested file name is appended.
    Directory(PathBuf),
    /// An explicit file path, used as-is.
    File(PathBuf),
    /// The caller dismissed the destination prompt.
    Cancelled,
}

/// Rendered editor source and the file it was rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    text: String,
    file_name: String,
    path: PathBuf,
    annotated_fields: Vec<String>,
}

impl GeneratedSource {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Suggested file name, `<TypeName>Editor.cs`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fields whose presentation annotations are now drawn by the editor.
    ///
    /// The target type should drop those annotations, otherwise the
    /// property drawers and the editor both draw them.
    pub fn annotated_fields(&self) -> &[String] {
        &self.annotated_fields
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Check whether a type derives from one of [`ELIGIBLE_BASES`].
pub fn is_eligible(target: &TypeDescription) -> bool {
    ELIGIBLE_BASES.iter().any(|base| target.derives_from(base))
}

/// One generation request.
#[derive(Debug, Default)]
pub struct Generation {
    state: GenerationState,
    type_name: String,
    unit: Option<CompilationUnit>,
    annotated_fields: Vec<String>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// The assembled AST, available while the request is `Built`.
    pub fn unit(&self) -> Option<&CompilationUnit> {
        self.unit.as_ref()
    }

    /// Validate the target and assemble its editor AST.
    ///
    /// Fails with [`GenerationError::InvalidInput`] when the target is absent
    /// or malformed and with [`GenerationError::IneligibleType`] when it does
    /// not derive from an eligible base. Either failure leaves the request
    /// `Failed` without an AST. Unsupported annotations are reported to
    /// `notices` and never fail the request.
    pub fn build(
        &mut self,
        target: Option<&TypeDescription>,
        notices: &mut dyn NoticeSink,
    ) -> GenerationResult<()> {
        self.require(GenerationState::Idle)?;
        self.transition(GenerationState::Validating)?;

        let target = match validate(target) {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(error = %err, "generation request rejected");
                self.transition(GenerationState::Failed)?;
                return Err(err);
            }
        };

        self.transition(GenerationState::Building)?;
        let assembled = assemble(target, notices)?;
        self.type_name = target.name.clone();
        self.unit = Some(assembled.unit);
        self.annotated_fields = assembled.annotated_fields;
        self.transition(GenerationState::Built)
    }

    /// Render the assembled AST for `destination`.
    ///
    /// Consumes the AST. A [`Destination::Cancelled`] completes the request
    /// with `Ok(None)`; nothing is rendered and no error is raised.
    pub fn render(&mut self, destination: &Destination) -> GenerationResult<Option<GeneratedSource>> {
        self.require(GenerationState::Built)?;
        let Some(unit) = self.unit.take() else {
            return Err(GenerationError::InvalidState {
                expected: GenerationState::Built,
                actual: self.state,
            });
        };

        let file_name = naming::source_file_name(&self.type_name);
        let path = match destination {
            Destination::Directory(dir) => dir.join(&file_name),
            Destination::File(path) => path.clone(),
            Destination::Cancelled => {
                tracing::info!(type_name = %self.type_name, "generation cancelled");
                self.transition(GenerationState::Cancelled)?;
                return Ok(None);
            }
        };

        let text = csharp::render(&unit);
        self.transition(GenerationState::Rendered)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "rendered editor source");

        Ok(Some(GeneratedSource {
            text,
            file_name,
            path,
            annotated_fields: std::mem::take(&mut self.annotated_fields),
        }))
    }

    fn require(&self, expected: GenerationState) -> GenerationResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GenerationError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    fn transition(&mut self, to: GenerationState) -> GenerationResult<()> {
        if !self.state.can_transition_to(to) {
            return Err(GenerationError::InvalidState {
                expected: to,
                actual: self.state,
            });
        }
        tracing::debug!(from = %self.state, to = %to, "generation state change");
        self.state = to;
        Ok(())
    }
}

/// Run a fresh request end to end.
pub fn generate_editor(
    target: Option<&TypeDescription>,
    destination: &Destination,
    notices: &mut dyn NoticeSink,
) -> GenerationResult<Option<GeneratedSource>> {
    let mut generation = Generation::new();
    generation.build(target, notices)?;
    generation.render(destination)
}

// Eligibility is checked before structural validity so that every
// ineligible type reports IneligibleType.
fn validate(target: Option<&TypeDescription>) -> GenerationResult<&TypeDescription> {
    let target = target.ok_or_else(|| {
        GenerationError::InvalidInput("target type description is required".to_string())
    })?;

    if !is_eligible(target) {
        return Err(GenerationError::IneligibleType {
            type_name: target.qualified_name(),
        });
    }

    target.validate()?;
    Ok(target)
}

struct Assembled {
    unit: CompilationUnit,
    annotated_fields: Vec<String>,
}

fn assemble(target: &TypeDescription, notices: &mut dyn NoticeSink) -> GenerationResult<Assembled> {
    let fields = select_serialized_fields(Some(target))?;
    tracing::debug!(
        type_name = %target.qualified_name(),
        total = target.fields.len(),
        selected = fields.len(),
        "selected serialized fields"
    );

    let mut labels = Vec::with_capacity(fields.len());
    let mut body = vec![serialized_object().call("Update", vec![]).stmt()];
    let mut annotated_fields = Vec::new();

    for field in fields {
        let plan = map_field(field, notices);
        if plan.draws_annotations {
            annotated_fields.push(field.name.clone());
        }
        labels.push(Member::Field(plan.label));
        body.extend(plan.prefix);
        body.push(plan.body);
    }
    body.push(serialized_object().call("ApplyModifiedProperties", vec![]).stmt());

    let mut members = labels;
    members.push(Member::Method(inspector_gui(body)));

    let class = ClassDecl {
        access: Access::Public,
        name: naming::editor_class_name(&target.name),
        base: EDITOR_BASE.to_string(),
        attributes: vec![AttributeDecl {
            name: "CustomEditor".to_string(),
            args: vec![Expr::TypeOf(target.qualified_name())],
        }],
        members,
    };

    let unit = CompilationUnit::new(
        naming::editor_namespace(target.namespace.as_deref()),
        IMPORTS,
        class,
    );

    Ok(Assembled {
        unit,
        annotated_fields,
    })
}

fn serialized_object() -> Expr {
    Expr::ident("serializedObject")
}

fn inspector_gui(body: Vec<Stmt>) -> MethodDecl {
    MethodDecl {
        access: Access::Public,
        is_override: true,
        return_type: "void".to_string(),
        name: "OnInspectorGUI".to_string(),
        body,
    }
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
