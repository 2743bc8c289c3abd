//! Same-page anchor navigation.

/// Looks up fragment targets and scrolls to them.
pub trait FragmentHost {
    type Target;

    fn find_by_id(&self, id: &str) -> Option<Self::Target>;

    /// Smoothly scroll so the target's top meets the viewport's top.
    fn scroll_to(&self, target: &Self::Target);
}

/// Extracts the element id from a `#fragment` href.
///
/// Returns `None` for hrefs that are not same-page fragments and for the bare
/// `#`. Percent-escapes are decoded the way browsers do for fragment
/// navigation; undecodable input is used as written.
pub fn fragment_id(href: &str) -> Option<String> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    Some(percent_decode(raw).unwrap_or_else(|| raw.to_string()))
}

/// Resolves `href` and scrolls to its target. Returns whether a scroll was issued.
pub fn navigate_to_fragment<H: FragmentHost>(host: &H, href: &str) -> bool {
    let Some(id) = fragment_id(href) else {
        return false;
    };
    match host.find_by_id(&id) {
        Some(target) => {
            host.scroll_to(&target);
            true
        }
        None => {
            log::debug!("anchor target #{id} not found");
            false
        }
    }
}

fn percent_decode(s: &str) -> Option<String> {
    if !s.contains('%') {
        return Some(s.to_string());
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolls: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FragmentHost for FakePage {
        type Target = String;

        fn find_by_id(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|&&x| x == id).map(|x| x.to_string())
        }

        fn scroll_to(&self, target: &String) {
            self.scrolls.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#features").as_deref(), Some("features"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/pricing#faq"), None);
        assert_eq!(fragment_id("#quick%20start").as_deref(), Some("quick start"));
        assert_eq!(fragment_id("#100%").as_deref(), Some("100%"));
    }

    #[test]
    fn existing_target_scrolls_once() {
        let page = FakePage::with_ids(&["features", "pricing"]);
        assert!(navigate_to_fragment(&page, "#pricing"));
        assert_eq!(page.scrolls.borrow().as_slice(), ["pricing".to_string()]);
    }

    #[test]
    fn missing_target_is_silent() {
        let page = FakePage::with_ids(&["features"]);
        assert!(!navigate_to_fragment(&page, "#nowhere"));
        assert!(!navigate_to_fragment(&page, "#"));
        assert!(page.scrolls.borrow().is_empty());
    }
}
