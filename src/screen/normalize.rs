// ============================================================================
// Name and target normalization — slugs, nav-target matching, fingerprints
// ============================================================================

/// Derive the stable navigation slug for a screen name.
///
/// Trimmed, lowercased, every run of non-alphanumeric characters collapsed
/// to a single `-`. `"Sign Up"`, `"sign-up"`, and `"SIGN  UP"` all map to
/// `"sign-up"`. Returns an empty string for names with no alphanumeric
/// content; such names are unaddressable and rejected by the registry.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Normalize a link target into a candidate screen slug.
///
/// Returns `None` for targets that can never reference a screen: empty
/// strings, anything with a URL scheme, and absolute or parent-relative
/// paths. A leading `#` and a trailing `.html`/`.htm` are stripped so that
/// upstream generators may emit `Details`, `#details`, or `details.html`
/// interchangeably.
pub fn normalize_nav_target(raw: &str) -> Option<String> {
    let target = raw.trim();
    if target.is_empty() {
        return None;
    }

    if target.contains("://") {
        return None;
    }
    let lower = target.to_lowercase();
    if lower.starts_with("mailto:") || lower.starts_with("tel:") || lower.starts_with("javascript:")
    {
        return None;
    }
    if target.starts_with('/') || target.starts_with("../") {
        return None;
    }

    let mut t = target.strip_prefix("./").unwrap_or(target);
    t = t.strip_prefix('#').unwrap_or(t);
    if t.len() > 5 && t.to_ascii_lowercase().ends_with(".html") {
        t = &t[..t.len() - 5];
    } else if t.len() > 4 && t.to_ascii_lowercase().ends_with(".htm") {
        t = &t[..t.len() - 4];
    }

    let slug = slugify(t);
    if slug.is_empty() { None } else { Some(slug) }
}

/// Stable fingerprint of an emitted document, for reproducibility checks.
pub fn html_fingerprint(html: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}
