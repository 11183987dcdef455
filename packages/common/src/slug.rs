use unicode_normalization::UnicodeNormalization;

/// Convert a title into a URL-safe slug.
///
/// The input is NFKD-decomposed first, so accented letters keep their base
/// letter (`é` becomes `e`) and compatibility forms such as ligatures are
/// expanded. Then it lowercases, keeps ASCII letters, digits and underscores,
/// turns runs of whitespace and hyphens into a single hyphen and drops every
/// other character. Leading and trailing hyphens and underscores are stripped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.nfkd().flat_map(char::to_lowercase) {
        match ch {
            'a'..='z' | '0'..='9' | '_' => {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(ch);
            }
            '-' => pending_separator = true,
            c if c.is_whitespace() => pending_separator = true,
            _ => {}
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}
