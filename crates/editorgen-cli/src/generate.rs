//! Generate command implementation

use crate::description::Description;
use anyhow::{Context, Result};
use editorgen_codegen::{Destination, GeneratedSource, generate_editor};
use editorgen_core::TracingSink;
use std::path::{Path, PathBuf};

/// Options for one `generate` invocation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Description file to load
    pub input: PathBuf,
    /// Output directory; the suggested file name is appended
    pub output: Option<PathBuf>,
    /// Explicit output file, takes precedence over `output`
    pub file: Option<PathBuf>,
    /// Print the source instead of writing it
    pub stdout: bool,
}

impl GenerateOptions {
    fn destination(&self) -> Destination {
        match (&self.file, &self.output) {
            (Some(file), _) => Destination::File(file.clone()),
            (None, Some(dir)) => Destination::Directory(dir.clone()),
            (None, None) => Destination::Directory(PathBuf::from(".")),
        }
    }
}

/// Generate an editor from a description file
///
/// Returns the written path, or `None` when the source went to stdout.
pub fn run(options: &GenerateOptions) -> Result<Option<PathBuf>> {
    let target = Description::from_file(&options.input)?.into_type()?;

    tracing::info!(type_name = %target.qualified_name(), "generating editor");

    let Some(source) = generate_editor(Some(&target), &options.destination(), &mut TracingSink)?
    else {
        return Ok(None);
    };

    remind_annotations(&target.name, &source);

    if options.stdout {
        print!("{}", source.text());
        return Ok(None);
    }

    write_source(&source)?;
    println!("✓ Wrote {}", source.path().display());

    Ok(Some(source.path().to_path_buf()))
}

/// Replace whatever is at the source path with the new text
fn write_source(source: &GeneratedSource) -> Result<()> {
    let path = source.path();

    remove_stale(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    std::fs::write(path, source.text())
        .with_context(|| format!("Failed to write editor source: {:?}", path))?;

    Ok(())
}

fn remove_stale(path: &Path) -> Result<()> {
    if path.is_file() {
        tracing::debug!(path = %path.display(), "removing stale editor source");
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove stale file: {:?}", path))?;
    }
    Ok(())
}

/// The editor now draws these annotations itself; left on the target they
/// are drawn twice.
fn remind_annotations(type_name: &str, source: &GeneratedSource) {
    if source.annotated_fields().is_empty() {
        return;
    }

    tracing::info!(
        type_name,
        fields = %source.annotated_fields().join(", "),
        "remove Header, Space, Range and Tooltip annotations from the target type"
    );
}
