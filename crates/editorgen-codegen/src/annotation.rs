//! Mapping of field annotations onto generated editor code.
//!
//! Each selected field becomes a [`FieldPlan`]:
//!
//! ```text
//! [Header("Stats")] [Range(0, 10)] public int speed;
//!     │
//!     ├─ label   private GUIContent speedContent = new GUIContent("Speed");
//!     ├─ prefix  EditorGUILayout.LabelField("Stats", EditorStyles.boldLabel);
//!     └─ body    EditorGUILayout.IntSlider(serializedObject.FindProperty("speed"), 0, 10, speedContent);
//! ```
//!
//! `Range` replaces the default `PropertyField` body; `Header` and `Space`
//! only prepend statements. Deferred and unrecognized kinds produce a
//! [`Notice`] and leave the plan untouched.

use crate::ast::{Access, Expr, FieldDecl, Stmt};
use crate::naming;
use editorgen_core::{Annotation, FieldDescription, Notice, NoticeSink};

/// Generated code for one selected field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlan {
    /// `GUIContent` field labelling the target field.
    pub label: FieldDecl,

    /// Statements emitted before the body, in annotation order.
    pub prefix: Vec<Stmt>,

    /// The single statement drawing the field.
    pub body: Stmt,

    /// Whether any presentation annotation was turned into code.
    pub draws_annotations: bool,
}

/// Build the plan for a field, reporting unsupported annotations to `notices`.
pub fn map_field(field: &FieldDescription, notices: &mut dyn NoticeSink) -> FieldPlan {
    let label_name = naming::label_field_name(&field.name);
    let mut prefix = Vec::new();
    let mut range = None;
    let mut tooltip = None;

    for annotation in &field.annotations {
        match annotation {
            Annotation::SerializeMarker | Annotation::NonSerializedMarker => {}
            Annotation::Header(text) => prefix.push(header(text)),
            Annotation::Space(height) => prefix.push(space(*height)),
            Annotation::Range { min, max } => range = Some((*min, *max)),
            Annotation::Tooltip(text) => tooltip = Some(text.as_str()),
            Annotation::Deferred(_) | Annotation::Unrecognized(_) => {
                tracing::debug!(
                    field = %field.name,
                    kind = annotation.kind(),
                    "falling back to default field rendering"
                );
                notices.notice(Notice::unsupported(&field.name, annotation.kind()));
            }
        }
    }

    let draws_annotations = !prefix.is_empty() || range.is_some() || tooltip.is_some();

    let property = Expr::ident("serializedObject")
        .call("FindProperty", vec![Expr::str(field.name.as_str())]);
    let content = Expr::ident(label_name.as_str());
    let body = match range {
        Some((min, max)) if is_integral(&field.ty) => editor_layout().call(
            "IntSlider",
            vec![
                property,
                Expr::Int(int_bound(&field.name, min)),
                Expr::Int(int_bound(&field.name, max)),
                content,
            ],
        ),
        Some((min, max)) => editor_layout().call(
            "Slider",
            vec![property, Expr::Float(min), Expr::Float(max), content],
        ),
        None => editor_layout().call("PropertyField", vec![property, content]),
    }
    .stmt();

    let mut label_args = vec![Expr::str(naming::nicify(&field.name))];
    if let Some(text) = tooltip {
        label_args.push(Expr::str(text));
    }
    let label = FieldDecl {
        access: Access::Private,
        ty: "GUIContent".to_string(),
        name: label_name,
        initializer: Some(Expr::new_object("GUIContent", label_args)),
    };

    FieldPlan {
        label,
        prefix,
        body,
        draws_annotations,
    }
}

fn editor_layout() -> Expr {
    Expr::ident("EditorGUILayout")
}

fn header(text: &str) -> Stmt {
    editor_layout()
        .call(
            "LabelField",
            vec![
                Expr::str(text),
                Expr::ident("EditorStyles").member("boldLabel"),
            ],
        )
        .stmt()
}

fn space(height: f32) -> Stmt {
    Expr::ident("GUILayout")
        .call("Space", vec![Expr::Float(height)])
        .stmt()
}

/// Convert a `Range` bound to an `int` literal.
///
/// Fractions truncate toward zero like a C# `(int)` cast; values beyond the
/// `int` range saturate at `int.MinValue`/`int.MaxValue`.
fn int_bound(field: &str, value: f32) -> i64 {
    let bound = value as i32;
    if bound as f32 != value {
        tracing::debug!(field, value, bound, "range bound adjusted for IntSlider");
    }
    i64::from(bound)
}

/// Integer-valued field types get an `IntSlider` for `Range`.
fn is_integral(ty: &str) -> bool {
    matches!(
        ty,
        "int"
            | "uint"
            | "short"
            | "ushort"
            | "byte"
            | "sbyte"
            | "long"
            | "ulong"
            | "System.Int32"
            | "System.UInt32"
            | "System.Int16"
            | "System.UInt16"
            | "System.Byte"
            | "System.SByte"
            | "System.Int64"
            | "System.UInt64"
    )
}
