/// Placeholder replaced by the logical name in a candidate template.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Expand `templates` for `name`, in order.
///
/// Templates without a `{name}` placeholder are used verbatim, so a fixed
/// fallback location can sit at the end of a list.
pub fn expand_templates<S: AsRef<str>>(templates: &[S], name: &str) -> Vec<String> {
    templates
        .iter()
        .map(|t| t.as_ref().replace(NAME_PLACEHOLDER, name))
        .collect()
}

/// Extensions that mark a logical name as an explicit file rather than a basename.
const EXPLICIT_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "webp", "wav", "mp3"];

/// Whether `name` already names a concrete file (e.g. `icons/youtube.svg`), in
/// which case it is its own single candidate.
pub fn is_explicit_file(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            EXPLICIT_EXTENSIONS.iter().any(|x| *x == e)
        })
        .unwrap_or(false)
}
