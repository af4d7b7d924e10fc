//! Golden-file tests for generated editor source
//!
//! The rendered text is part of the output contract: regenerating an editor
//! must reproduce these files byte for byte.

#![allow(non_snake_case)]

use editorgen_codegen::{Destination, generate_editor};
use editorgen_core::{Annotation, DeferredKind, FieldDescription, Notice, TypeDescription};
use std::path::PathBuf;

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

fn player_stats() -> TypeDescription {
    TypeDescription::new("PlayerStats")
        .with_ancestor("UnityEngine.ScriptableObject")
        .with_field(
            FieldDescription::new("m_maxHealth", "int")
                .non_public()
                .with_annotation(Annotation::SerializeMarker)
                .with_annotation(Annotation::Header("Vitals".into()))
                .with_annotation(Annotation::Tooltip("hint".into())),
        )
        .with_field(
            FieldDescription::new("volume", "float")
                .with_annotation(Annotation::Space(8.0))
                .with_annotation(Annotation::Range { min: 0.0, max: 1.0 }),
        )
        .with_field(
            FieldDescription::new("notes", "string")
                .with_annotation(Annotation::Deferred(DeferredKind::TextArea)),
        )
        .with_field(
            FieldDescription::new("cache", "int").with_annotation(Annotation::NonSerializedMarker),
        )
        .with_field(FieldDescription::new("secret", "int").non_public())
}

fn generate(target: &TypeDescription, notices: &mut Vec<Notice>) -> String {
    generate_editor(
        Some(target),
        &Destination::Directory(PathBuf::from("Assets/Editor")),
        notices,
    )
    .expect("generation should succeed")
    .expect("destination was not cancelled")
    .into_text()
}

#[test]
fn golden___foo___matches_expected_source() {
    let text = generate(&foo(), &mut Vec::new());

    assert_eq!(text, include_str!("golden/FooEditor.cs"));
}

#[test]
fn golden___player_stats___matches_expected_source() {
    let mut notices = Vec::new();

    let text = generate(&player_stats(), &mut notices);

    assert_eq!(text, include_str!("golden/PlayerStatsEditor.cs"));
    assert_eq!(notices, vec![Notice::unsupported("notes", "text_area")]);
}

#[test]
fn golden___independent_runs___identical_text() {
    let first = generate(&player_stats(), &mut Vec::new());
    let second = generate(&player_stats(), &mut Vec::new());

    assert_eq!(first, second);
}

#[test]
fn golden___no_namespace___no_namespace_block() {
    let text = generate(&player_stats(), &mut Vec::new());

    assert!(!text.contains("namespace"));
    assert!(text.contains("\npublic class PlayerStatsEditor : UnityEditor.Editor\n{\n"));
}
