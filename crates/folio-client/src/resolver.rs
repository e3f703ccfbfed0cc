//! Resolution of attachment references returned alongside answers.

/// Turns possibly-relative attachment references into absolute locators.
///
/// References that already carry a scheme pass through untouched; anything
/// else is joined onto the configured backend origin. Pure and deterministic,
/// no network access.
#[derive(Debug, Clone)]
pub struct AttachmentResolver {
    origin: String,
}

impl AttachmentResolver {
    pub fn new(origin: &str) -> AttachmentResolver {
        AttachmentResolver {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }

        if reference.starts_with('/') {
            return format!("{}{}", self.origin, reference);
        }

        format!("{}/{}", self.origin, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_references_pass_through() {
        let resolver = AttachmentResolver::new("http://localhost:8000");

        assert_eq!(
            resolver.resolve("http://elsewhere.test/img/1.png"),
            "http://elsewhere.test/img/1.png"
        );
        assert_eq!(
            resolver.resolve("https://elsewhere.test/img/1.png"),
            "https://elsewhere.test/img/1.png"
        );
    }

    #[test]
    fn test_relative_references_are_joined_to_origin() {
        let resolver = AttachmentResolver::new("http://localhost:8000");

        assert_eq!(
            resolver.resolve("/static/images/result_0.jpg"),
            "http://localhost:8000/static/images/result_0.jpg"
        );
        assert_eq!(
            resolver.resolve("static/images/result_0.jpg"),
            "http://localhost:8000/static/images/result_0.jpg"
        );
    }

    #[test]
    fn test_trailing_origin_slash_is_not_doubled() {
        let resolver = AttachmentResolver::new("http://localhost:8000/");

        assert_eq!(
            resolver.resolve("/img/1.png"),
            "http://localhost:8000/img/1.png"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = AttachmentResolver::new("http://localhost:8000");

        let once = resolver.resolve("/img/1.png");
        assert_eq!(resolver.resolve(&once), once);
    }
}
