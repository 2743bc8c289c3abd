/// Description of an element built by `createInteractiveElement`.
///
/// `inner_html` is injected as raw markup. Only pass trusted, static content:
/// anything user-supplied can smuggle in script-bearing markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub inner_html: String,
    /// `None` when no class was given or it was empty.
    pub class_name: Option<String>,
}

impl ElementSpec {
    pub fn new(tag: &str, inner_html: &str, class_name: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            inner_html: inner_html.to_string(),
            class_name: class_name
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_is_kept_when_given() {
        let spec = ElementSpec::new("span", "<b>hi</b>", Some("tag"));
        assert_eq!(spec.tag, "span");
        assert_eq!(spec.inner_html, "<b>hi</b>");
        assert_eq!(spec.class_name.as_deref(), Some("tag"));
    }

    #[test]
    fn missing_or_empty_class_is_unset() {
        assert_eq!(ElementSpec::new("span", "<b>hi</b>", None).class_name, None);
        assert_eq!(ElementSpec::new("div", "", Some("")).class_name, None);
    }
}
