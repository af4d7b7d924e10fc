#![allow(non_snake_case)]

use super::*;
use editorgen_core::{Annotation, DeferredKind, FieldDescription, Notice};
use test_case::test_case;

fn foo() -> TypeDescription {
    TypeDescription::new("Foo")
        .with_namespace("Game")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(FieldDescription::new("speed", "int").with_annotation(Annotation::Range {
            min: 0.0,
            max: 10.0,
        }))
        .with_field(FieldDescription::new("label", "string"))
}

fn body_methods(unit: &CompilationUnit) -> Vec<String> {
    let method = unit.methods().next().unwrap();
    method
        .body
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expr(Expr::Call { method, .. }) => method.clone(),
            other => panic!("unexpected statement: {other:?}"),
        })
        .collect()
}

// Eligibility

#[test_case("UnityEngine.MonoBehaviour", true)]
#[test_case("UnityEngine.ScriptableObject", true)]
#[test_case("MonoBehaviour", true)]
#[test_case("UnityEngine.Object", false)]
#[test_case("System.Object", false)]
fn is_eligible___by_lineage(ancestor: &str, expected: bool) {
    let ty = TypeDescription::new("Foo").with_ancestor(ancestor);

    assert_eq!(is_eligible(&ty), expected);
}

#[test]
fn Generation___build___absent_target___invalid_input_and_failed() {
    let mut generation = Generation::new();

    let err = generation.build(None, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, GenerationError::InvalidInput(_)));
    assert_eq!(generation.state(), GenerationState::Failed);
    assert!(generation.unit().is_none());
}

#[test]
fn Generation___build___ineligible___ineligible_type_and_no_ast() {
    let ty = TypeDescription::new("Plain")
        .with_namespace("Game")
        .with_ancestor("System.Object");
    let mut generation = Generation::new();

    let err = generation.build(Some(&ty), &mut Vec::new()).unwrap_err();

    assert_eq!(
        err,
        GenerationError::IneligibleType {
            type_name: "Game.Plain".into()
        }
    );
    assert_eq!(generation.state(), GenerationState::Failed);
    assert!(generation.unit().is_none());
}

#[test]
fn Generation___build___ineligible_and_malformed___still_ineligible() {
    let ty = TypeDescription::new("Plain").with_field(FieldDescription::new("bad name", "int"));

    let err = Generation::new().build(Some(&ty), &mut Vec::new()).unwrap_err();

    assert!(matches!(err, GenerationError::IneligibleType { .. }));
}

#[test]
fn Generation___build___malformed_field___invalid_input() {
    let ty = TypeDescription::new("Foo")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(FieldDescription::new("bad name", "int"));

    let err = Generation::new().build(Some(&ty), &mut Vec::new()).unwrap_err();

    assert!(matches!(err, GenerationError::InvalidInput(_)));
}

#[test]
fn Generation___build___eligible___built_with_ast() {
    let mut generation = Generation::new();

    generation.build(Some(&foo()), &mut Vec::new()).unwrap();

    assert_eq!(generation.state(), GenerationState::Built);
    assert!(generation.unit().is_some());
}

#[test]
fn Generation___build_twice___invalid_state() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();

    let err = generation.build(Some(&foo()), &mut Vec::new()).unwrap_err();

    assert_eq!(
        err,
        GenerationError::InvalidState {
            expected: GenerationState::Idle,
            actual: GenerationState::Built,
        }
    );
}

// AST shape

#[test]
fn Generation___build___assembles_expected_shape() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();
    let unit = generation.unit().unwrap();

    assert_eq!(unit.namespace(), Some("Game.Editor"));
    assert_eq!(unit.imports(), ["UnityEditor", "UnityEngine"]);
    assert_eq!(unit.class().name, "FooEditor");
    assert_eq!(unit.class().base, "UnityEditor.Editor");
    assert_eq!(
        unit.class().attributes,
        vec![AttributeDecl {
            name: "CustomEditor".into(),
            args: vec![Expr::TypeOf("Game.Foo".into())],
        }]
    );

    let names: Vec<&str> = unit
        .class()
        .members
        .iter()
        .map(|member| match member {
            Member::Field(f) => f.name.as_str(),
            Member::Method(m) => m.name.as_str(),
        })
        .collect();
    assert_eq!(names, ["speedContent", "labelContent", "OnInspectorGUI"]);

    assert_eq!(
        body_methods(unit),
        ["Update", "IntSlider", "PropertyField", "ApplyModifiedProperties"]
    );
}

#[test]
fn Generation___build___no_namespace___no_namespace_in_ast() {
    let ty = TypeDescription::new("Foo").with_ancestor("UnityEngine.ScriptableObject");
    let mut generation = Generation::new();

    generation.build(Some(&ty), &mut Vec::new()).unwrap();

    let unit = generation.unit().unwrap();
    assert_eq!(unit.namespace(), None);
    assert_eq!(
        unit.class().attributes[0].args,
        vec![Expr::TypeOf("Foo".into())]
    );
}

#[test]
fn Generation___build___prefix_statements_precede_field_body() {
    let ty = TypeDescription::new("Foo")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(FieldDescription::new("a", "int"))
        .with_field(
            FieldDescription::new("b", "float")
                .with_annotation(Annotation::Header("Stats".into()))
                .with_annotation(Annotation::Space(4.0)),
        );
    let mut generation = Generation::new();

    generation.build(Some(&ty), &mut Vec::new()).unwrap();

    assert_eq!(
        body_methods(generation.unit().unwrap()),
        [
            "Update",
            "PropertyField",
            "LabelField",
            "Space",
            "PropertyField",
            "ApplyModifiedProperties"
        ]
    );
}

#[test]
fn Generation___build___excluded_fields_absent_from_ast() {
    let ty = TypeDescription::new("Foo")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(FieldDescription::new("hidden", "int").non_public())
        .with_field(FieldDescription::new("shown", "int"));
    let mut generation = Generation::new();

    generation.build(Some(&ty), &mut Vec::new()).unwrap();

    let fields: Vec<&str> = generation
        .unit()
        .unwrap()
        .fields()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(fields, ["shownContent"]);
}

#[test]
fn Generation___build___unsupported_annotation___notice_without_failure() {
    let ty = TypeDescription::new("Foo")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(
            FieldDescription::new("notes", "string")
                .with_annotation(Annotation::Deferred(DeferredKind::TextArea)),
        );
    let mut notices = Vec::new();
    let mut generation = Generation::new();

    generation.build(Some(&ty), &mut notices).unwrap();

    assert_eq!(notices, vec![Notice::unsupported("notes", "text_area")]);
    assert_eq!(
        body_methods(generation.unit().unwrap()),
        ["Update", "PropertyField", "ApplyModifiedProperties"]
    );
}

#[test]
fn Generation___build___unrecognized_named_like_header___notice_without_failure() {
    let ty = TypeDescription::new("Foo")
        .with_ancestor("UnityEngine.MonoBehaviour")
        .with_field(
            FieldDescription::new("title", "string")
                .with_annotation(Annotation::Header("X".into()))
                .with_annotation(Annotation::Unrecognized("header".into())),
        );
    let mut notices = Vec::new();
    let mut generation = Generation::new();

    generation.build(Some(&ty), &mut notices).unwrap();

    assert_eq!(notices, vec![Notice::unsupported("title", "header")]);
    assert_eq!(
        body_methods(generation.unit().unwrap()),
        ["Update", "LabelField", "PropertyField", "ApplyModifiedProperties"]
    );
}

// Rendering

#[test]
fn Generation___render___directory_joins_suggested_name() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();

    let source = generation
        .render(&Destination::Directory(PathBuf::from("Assets/Editor")))
        .unwrap()
        .unwrap();

    assert_eq!(source.file_name(), "FooEditor.cs");
    assert_eq!(source.path(), Path::new("Assets/Editor/FooEditor.cs"));
    assert_eq!(generation.state(), GenerationState::Rendered);
    assert!(generation.unit().is_none(), "AST is consumed by rendering");
}

#[test]
fn Generation___render___explicit_file_used_as_is() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();

    let source = generation
        .render(&Destination::File(PathBuf::from("out/Custom.cs")))
        .unwrap()
        .unwrap();

    assert_eq!(source.path(), Path::new("out/Custom.cs"));
    assert_eq!(source.file_name(), "FooEditor.cs");
}

#[test]
fn Generation___render___cancelled___no_output_no_error() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();

    let result = generation.render(&Destination::Cancelled).unwrap();

    assert!(result.is_none());
    assert_eq!(generation.state(), GenerationState::Cancelled);
}

#[test]
fn Generation___render_twice___invalid_state() {
    let mut generation = Generation::new();
    generation.build(Some(&foo()), &mut Vec::new()).unwrap();
    generation
        .render(&Destination::Directory(PathBuf::from(".")))
        .unwrap();

    let err = generation
        .render(&Destination::Directory(PathBuf::from(".")))
        .unwrap_err();

    assert_eq!(
        err,
        GenerationError::InvalidState {
            expected: GenerationState::Built,
            actual: GenerationState::Rendered,
        }
    );
}

#[test]
fn Generation___render_before_build___invalid_state() {
    let mut generation = Generation::new();

    let err = generation.render(&Destination::Cancelled).unwrap_err();

    assert!(matches!(err, GenerationError::InvalidState { .. }));
    assert_eq!(generation.state(), GenerationState::Idle);
}

#[test]
fn GeneratedSource___annotated_fields___lists_fields_with_presentation() {
    let source = generate_editor(
        Some(&foo()),
        &Destination::Directory(PathBuf::from(".")),
        &mut Vec::new(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(source.annotated_fields(), ["speed"]);
}

#[test]
fn generate_editor___failure___propagates_error() {
    let result = generate_editor(None, &Destination::Cancelled, &mut Vec::new());

    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn generate_editor___cancelled___none() {
    let result = generate_editor(Some(&foo()), &Destination::Cancelled, &mut Vec::new()).unwrap();

    assert!(result.is_none());
}
