//! Naming derivation for generated editors.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Foo` | [`editor_class_name`] | `FooEditor` |
//! | `Some("Game")` | [`editor_namespace`] | `Some("Game.Editor")` |
//! | `speed` | [`label_field_name`] | `speedContent` |
//! | `Foo` | [`source_file_name`] | `FooEditor.cs` |
//! | `m_maxHealth` | [`nicify`] | `Max Health` |

/// Suffix appended to the target type name to form the editor class name.
pub const CLASS_SUFFIX: &str = "Editor";

/// Segment appended to the target namespace.
pub const NAMESPACE_SUFFIX: &str = "Editor";

/// Suffix appended to a field name to form its label field name.
pub const LABEL_SUFFIX: &str = "Content";

/// Conventional extension of generated source files.
pub const SOURCE_EXTENSION: &str = "cs";

/// Editor class name for a target type.
///
/// # Examples
///
/// ```
/// use editorgen_codegen::naming::editor_class_name;
///
/// assert_eq!(editor_class_name("Foo"), "FooEditor");
/// ```
pub fn editor_class_name(type_name: &str) -> String {
    format!("{type_name}{CLASS_SUFFIX}")
}

/// Namespace of the generated editor.
///
/// A target without a namespace (or with an empty one) yields no namespace,
/// never a bare suffix.
///
/// # Examples
///
/// ```
/// use editorgen_codegen::naming::editor_namespace;
///
/// assert_eq!(editor_namespace(Some("Game")), Some("Game.Editor".to_string()));
/// assert_eq!(editor_namespace(None), None);
/// assert_eq!(editor_namespace(Some("")), None);
/// ```
pub fn editor_namespace(namespace: Option<&str>) -> Option<String> {
    namespace
        .filter(|ns| !ns.is_empty())
        .map(|ns| format!("{ns}.{NAMESPACE_SUFFIX}"))
}

/// Name of the `GUIContent` field that labels a target field.
pub fn label_field_name(field_name: &str) -> String {
    format!("{field_name}{LABEL_SUFFIX}")
}

/// Suggested file name for the generated editor source.
pub fn source_file_name(type_name: &str) -> String {
    format!("{}.{SOURCE_EXTENSION}", editor_class_name(type_name))
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use editorgen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a field identifier into an inspector display name.
///
/// Strips a leading `m_`, `_`, or `k` (before an uppercase letter), then
/// splits words at case changes, acronym ends, letter/digit boundaries,
/// and underscores.
///
/// # Examples
///
/// ```
/// use editorgen_codegen::naming::nicify;
///
/// assert_eq!(nicify("speed"), "Speed");
/// assert_eq!(nicify("m_maxHealth"), "Max Health");
/// assert_eq!(nicify("HTMLParser"), "HTML Parser");
/// assert_eq!(nicify("vector3Value"), "Vector 3 Value");
/// ```
pub fn nicify(name: &str) -> String {
    let chars: Vec<char> = strip_field_prefix(name).chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            None | Some('_') => false,
            Some(p) => {
                (c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()))
                    || (c.is_uppercase()
                        && p.is_uppercase()
                        && next.is_some_and(char::is_lowercase))
                    || (c.is_ascii_digit() && p.is_alphabetic())
            }
        };

        if boundary && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push(c);
    }

    capitalize(out.trim_end())
}

fn strip_field_prefix(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix("m_") {
        if !rest.is_empty() {
            return rest;
        }
    }
    if let Some(rest) = name.strip_prefix('k') {
        if rest.starts_with(char::is_uppercase) {
            return rest;
        }
    }
    if let Some(rest) = name.strip_prefix('_') {
        if !rest.is_empty() {
            return rest;
        }
    }
    name
}
