//! Serialized field selection.

use editorgen_core::{Annotation, FieldDescription, GenerationError, GenerationResult, TypeDescription};

/// Select the fields the host serializes, in declaration order.
///
/// A field qualifies when it is public and not marked `[NonSerialized]`, or
/// when it is explicitly marked `[SerializeField]` regardless of visibility.
///
/// Fails with [`GenerationError::InvalidInput`] when no type is given.
pub fn select_serialized_fields(
    target: Option<&TypeDescription>,
) -> GenerationResult<Vec<&FieldDescription>> {
    let target = target.ok_or_else(|| {
        GenerationError::InvalidInput("target type description is required".to_string())
    })?;

    Ok(target.fields.iter().filter(|f| is_serialized(f)).collect())
}

/// Serialization-visibility predicate for a single field.
pub fn is_serialized(field: &FieldDescription) -> bool {
    let serialize = field
        .annotations
        .iter()
        .any(|a| matches!(a, Annotation::SerializeMarker));
    let non_serialized = field
        .annotations
        .iter()
        .any(|a| matches!(a, Annotation::NonSerializedMarker));

    (field.is_public() && !non_serialized) || serialize
}
