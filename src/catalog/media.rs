/// Maps a stored image path onto the path the site serves it from.
///
/// Only the part after the last backslash is kept and re-rooted at `/`.
/// Forward slashes are left alone, so `a\b/c.png` becomes `/b/c.png`.
///
/// ```rust
/// use watch_catalog::resolve_image_path;
///
/// assert_eq!(resolve_image_path(Some("C:\\images\\watch.png")).as_deref(), Some("/watch.png"));
/// assert_eq!(resolve_image_path(Some("")), None);
/// ```
pub fn resolve_image_path(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    let filename = raw.rsplit('\\').next().unwrap_or(raw);
    Some(format!("/{filename}"))
}

/// Splits a comma separated colour field into trimmed, non-empty names.
pub fn split_colour_list(field: Option<&str>) -> Vec<String> {
    field
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|colour| !colour.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
