//! Non-fatal diagnostics emitted during generation

/// An annotation was found that the generator does not render.
///
/// Advisory only: the field still receives its default rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Name of the field carrying the annotation
    pub field: String,
    /// Annotation kind name
    pub kind: String,
}

impl Notice {
    pub fn unsupported(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "annotation '{}' on field '{}' is not supported yet",
            self.kind, self.field
        )
    }
}

/// Receiver for generation notices, supplied by the caller
pub trait NoticeSink {
    fn notice(&mut self, notice: Notice);
}

/// Collects notices in arrival order
impl NoticeSink for Vec<Notice> {
    fn notice(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Forwards notices as `tracing` warnings on the `editorgen::notice` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notice(&mut self, notice: Notice) {
        tracing::warn!(
            target: "editorgen::notice",
            field = %notice.field,
            kind = %notice.kind,
            "{}",
            notice
        );
    }
}
