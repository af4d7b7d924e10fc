//! Static description of the target type
//!
//! The generator never inspects types dynamically. An adapter (the CLI's
//! description loader, or a host integration) builds a [`TypeDescription`]
//! ahead of time and hands it to the pipeline read-only.

use crate::{GenerationError, GenerationResult};

/// A type for which a companion editor is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescription {
    /// Simple type name, e.g. `Foo`.
    pub name: String,

    /// Enclosing namespace, e.g. `Game`.
    pub namespace: Option<String>,

    /// Ancestor chain, nearest first, e.g. `["UnityEngine.MonoBehaviour"]`.
    pub lineage: Vec<String>,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescription>,
}

/// A candidate member of the target type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    /// Field identifier.
    pub name: String,

    /// Declared type as written in source, e.g. `int` or `UnityEngine.Color`.
    pub ty: String,

    /// Declared visibility.
    pub visibility: Visibility,

    /// Attached annotations in declaration order.
    pub annotations: Vec<Annotation>,
}

/// Field visibility as far as serialization is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    NonPublic,
}

/// A recognized field annotation.
///
/// The set is closed: adding a kind means adding a variant here and an arm
/// in the annotation mapper. Kinds the mapper knows about but cannot render
/// yet live under [`Annotation::Deferred`]; anything else is
/// [`Annotation::Unrecognized`].
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// `[SerializeField]`
    SerializeMarker,
    /// `[NonSerialized]`
    NonSerializedMarker,
    /// `[Header("text")]`
    Header(String),
    /// `[Space(height)]`
    Space(f32),
    /// `[Range(min, max)]`
    Range { min: f32, max: f32 },
    /// `[Tooltip("text")]`
    Tooltip(String),
    /// Known to the host but not rendered yet
    Deferred(DeferredKind),
    /// Any other annotation, by name
    Unrecognized(String),
}

/// Annotation kinds acknowledged but without a generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredKind {
    TextArea,
    Multiline,
    ContextMenuItem,
    GradientUsage,
    Delayed,
    Min,
}

impl DeferredKind {
    /// All deferred kinds, in a fixed order
    pub const ALL: [DeferredKind; 6] = [
        DeferredKind::TextArea,
        DeferredKind::Multiline,
        DeferredKind::ContextMenuItem,
        DeferredKind::GradientUsage,
        DeferredKind::Delayed,
        DeferredKind::Min,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeferredKind::TextArea => "text_area",
            DeferredKind::Multiline => "multiline",
            DeferredKind::ContextMenuItem => "context_menu_item",
            DeferredKind::GradientUsage => "gradient_usage",
            DeferredKind::Delayed => "delayed",
            DeferredKind::Min => "min",
        }
    }

    /// Look up a deferred kind by its snake_case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl Annotation {
    /// Kind name, unique per variant (per name for unrecognized kinds)
    pub fn kind(&self) -> &str {
        match self {
            Annotation::SerializeMarker => "serialize_field",
            Annotation::NonSerializedMarker => "non_serialized",
            Annotation::Header(_) => "header",
            Annotation::Space(_) => "space",
            Annotation::Range { .. } => "range",
            Annotation::Tooltip(_) => "tooltip",
            Annotation::Deferred(kind) => kind.name(),
            Annotation::Unrecognized(name) => name,
        }
    }

    /// Check whether two annotations are of the same kind.
    ///
    /// Recognized and deferred kinds compare by variant. An unrecognized
    /// annotation only matches another unrecognized one of the same name,
    /// so `Unrecognized("header")` is never mistaken for a `Header`.
    pub fn same_kind(&self, other: &Annotation) -> bool {
        match (self, other) {
            (Annotation::Unrecognized(a), Annotation::Unrecognized(b)) => a == b,
            (Annotation::Deferred(a), Annotation::Deferred(b)) => a == b,
            (Annotation::Unrecognized(_), _) | (_, Annotation::Unrecognized(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl TypeDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            lineage: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append an ancestor (nearest first)
    pub fn with_ancestor(mut self, ancestor: impl Into<String>) -> Self {
        self.lineage.push(ancestor.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescription) -> Self {
        self.fields.push(field);
        self
    }

    /// Namespace-qualified name, or the simple name without a namespace
    pub fn qualified_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Check whether `base` appears in the lineage.
    ///
    /// `base` is a qualified name such as `UnityEngine.MonoBehaviour`; a
    /// lineage entry matches either that name or its last segment.
    pub fn derives_from(&self, base: &str) -> bool {
        let short = base.rsplit('.').next().unwrap_or(base);
        self.lineage
            .iter()
            .any(|ancestor| ancestor == base || ancestor == short)
    }

    /// Check the structural invariants of the description.
    ///
    /// The type name, namespace segments, and field names must be valid
    /// identifiers, and no field may carry two annotations of the same kind.
    pub fn validate(&self) -> GenerationResult<()> {
        if !is_valid_identifier(&self.name) {
            return Err(GenerationError::InvalidInput(format!(
                "type name '{}' is not a valid identifier",
                self.name
            )));
        }

        if let Some(ns) = &self.namespace {
            if !ns.is_empty() && !ns.split('.').all(is_valid_identifier) {
                return Err(GenerationError::InvalidInput(format!(
                    "namespace '{ns}' is not a valid dotted name"
                )));
            }
        }

        for field in &self.fields {
            field.validate()?;
        }

        Ok(())
    }
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Public,
            annotations: Vec::new(),
        }
    }

    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::NonPublic;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Check whether an annotation of the same kind is attached
    pub fn has(&self, annotation: &Annotation) -> bool {
        self.annotations.iter().any(|a| a.same_kind(annotation))
    }

    fn validate(&self) -> GenerationResult<()> {
        if !is_valid_identifier(&self.name) {
            return Err(GenerationError::InvalidInput(format!(
                "field name '{}' is not a valid identifier",
                self.name
            )));
        }

        for (i, annotation) in self.annotations.iter().enumerate() {
            let repeated = self.annotations[..i]
                .iter()
                .any(|earlier| earlier.same_kind(annotation));
            if repeated {
                return Err(GenerationError::InvalidInput(format!(
                    "field '{}' carries more than one '{}' annotation",
                    self.name,
                    annotation.kind()
                )));
            }
        }

        Ok(())
    }
}

/// Check that `s` is a C# identifier (letters, digits, underscores, not
/// starting with a digit, not a reserved keyword).
pub(crate) fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_ok = match chars.next() {
        Some(c) => c == '_' || c.is_alphabetic(),
        None => false,
    };

    starts_ok && chars.all(|c| c == '_' || c.is_alphanumeric()) && !is_keyword(s)
}

fn is_keyword(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
        "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
        "using", "virtual", "void", "volatile", "while",
    ];

    KEYWORDS.contains(&s)
}
