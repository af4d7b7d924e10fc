//! Unity custom editor generation from static type descriptions.
//!
//! Given a [`TypeDescription`](editorgen_core::TypeDescription) of a
//! `MonoBehaviour` or `ScriptableObject`, this crate synthesizes the C#
//! source of a companion `Editor` that draws the type's serialized fields.
//!
//! # Architecture
//!
//! The pipeline runs strictly left to right:
//!
//! ```text
//! TypeDescription
//!     ↓
//!  [introspect]   serialized fields, declaration order
//!     ↓
//!  [annotation]   one FieldPlan per field (+ notices)
//!     ↓
//!  [generator]    CompilationUnit (AST)
//!     ↓
//!  [csharp]       source text
//! ```
//!
//! # Usage
//!
//! ```rust
//! use editorgen_codegen::{Destination, generate_editor};
//! use editorgen_core::{Annotation, FieldDescription, TypeDescription};
//! use std::path::PathBuf;
//!
//! let target = TypeDescription::new("Foo")
//!     .with_namespace("Game")
//!     .with_ancestor("UnityEngine.MonoBehaviour")
//!     .with_field(
//!         FieldDescription::new("speed", "int")
//!             .with_annotation(Annotation::Range { min: 0.0, max: 10.0 }),
//!     );
//!
//! let mut notices = Vec::new();
//! let source = generate_editor(
//!     Some(&target),
//!     &Destination::Directory(PathBuf::from("Assets/Editor")),
//!     &mut notices,
//! )
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(source.file_name(), "FooEditor.cs");
//! assert!(source.text().contains("public class FooEditor : UnityEditor.Editor"));
//! ```
//!
//! # See Also
//!
//! - [`ast`] for the syntax tree
//! - [`annotation`] for the annotation-to-code mapping
//! - [`csharp`] for the rendering conventions

pub mod annotation;
pub mod ast;
pub mod csharp;
pub mod generator;
pub mod introspect;
pub mod naming;

pub use annotation::{FieldPlan, map_field};
pub use ast::CompilationUnit;
pub use csharp::render;
pub use generator::{Destination, GeneratedSource, Generation, generate_editor, is_eligible};
pub use introspect::select_serialized_fields;
