//! Entity reference splitting for template references.

/// Positional parts of a `kind:namespace/name` reference.
///
/// The reference is split on both `:` and `/`; missing parts are `None`
/// and anything after the third part is ignored. Nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRefParts<'a> {
    pub kind: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl<'a> TemplateRefParts<'a> {
    pub fn split(template_ref: &'a str) -> Self {
        let mut parts = template_ref.split([':', '/']);
        Self {
            kind: parts.next(),
            namespace: parts.next(),
            name: parts.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_reference() {
        let parts = TemplateRefParts::split("template:default/my-template");
        assert_eq!(parts.kind, Some("template"));
        assert_eq!(parts.namespace, Some("default"));
        assert_eq!(parts.name, Some("my-template"));
    }

    #[test]
    fn test_split_kind_and_name() {
        let parts = TemplateRefParts::split("template/my-template");
        assert_eq!(parts.kind, Some("template"));
        assert_eq!(parts.namespace, Some("my-template"));
        assert_eq!(parts.name, None);
    }

    #[test]
    fn test_split_degenerate() {
        let parts = TemplateRefParts::split("my-template");
        assert_eq!(parts.kind, Some("my-template"));
        assert_eq!(parts.namespace, None);
        assert_eq!(parts.name, None);
    }

    #[test]
    fn test_split_extra_parts_ignored() {
        let parts = TemplateRefParts::split("a:b/c/d");
        assert_eq!(parts.name, Some("c"));
    }
}
