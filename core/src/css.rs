//! Class-name helpers for page elements.
//!
//! # Design
//! `Element` models the one capability the helpers need: read/write access
//! to a space-separated class-name string, mutated in place per call. The
//! helpers mirror long-standing page-script behavior rather than strict
//! token-list semantics:
//! - `remove` deletes the first occurrence of the class plus at most one
//!   whitespace character immediately before it.
//! - `add` always joins with a single space, so adding to an empty string
//!   leaves a leading space.
//! - `toggle` decides with a plain substring check, which is not token
//!   aware: "foo" is found inside "foobar".
//!
//! The mismatch between toggle's substring detection and remove's deletion
//! is kept as-is; callers depend on the historical behavior.

/// A page element, reduced to its class-name string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    class_name: String,
}

impl Element {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Delete the first occurrence of `class` from the element's class-name
/// string, together with at most one whitespace character immediately
/// before it. No-op when the class is absent.
pub fn remove(el: &mut Element, class: &str) {
    let Some(start) = el.class_name.find(class) else {
        return;
    };
    let cut = match el.class_name[..start].chars().next_back() {
        Some(c) if c.is_whitespace() => start - c.len_utf8(),
        _ => start,
    };
    el.class_name.replace_range(cut..start + class.len(), "");
}

/// Append `class` to the element's class-name string, removing any earlier
/// occurrence first so repeated adds do not accumulate duplicates.
pub fn add(el: &mut Element, class: &str) {
    remove(el, class);
    el.class_name = format!("{} {}", el.class_name, class);
}

/// Remove `class` if the class-name string contains it as a substring,
/// otherwise add it.
pub fn toggle(el: &mut Element, class: &str) {
    if el.class_name.contains(class) {
        remove(el, class);
    } else {
        add(el, class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_with_single_space() {
        let mut el = Element::new("box");
        add(&mut el, "active");
        assert_eq!(el.class_name(), "box active");
    }

    #[test]
    fn remove_after_add_restores_original() {
        let mut el = Element::new("box");
        add(&mut el, "active");
        remove(&mut el, "active");
        assert_eq!(el.class_name(), "box");
    }

    #[test]
    fn add_to_empty_leaves_leading_space() {
        let mut el = Element::new("");
        add(&mut el, "hidden");
        assert_eq!(el.class_name(), " hidden");
    }

    #[test]
    fn toggle_is_its_own_inverse_on_empty() {
        let mut el = Element::new("");
        toggle(&mut el, "hidden");
        assert_eq!(el.class_name(), " hidden");
        toggle(&mut el, "hidden");
        assert_eq!(el.class_name(), "");
    }

    #[test]
    fn remove_absent_class_is_noop() {
        let mut el = Element::new("box active");
        remove(&mut el, "hidden");
        assert_eq!(el.class_name(), "box active");
    }

    #[test]
    fn remove_takes_at_most_one_leading_whitespace() {
        let mut el = Element::new("box  active");
        remove(&mut el, "active");
        assert_eq!(el.class_name(), "box ");
    }

    #[test]
    fn remove_at_start_consumes_no_trailing_space() {
        // Only whitespace before the match is consumed, never after, so
        // removing the first class leaves the separator behind.
        let mut el = Element::new("active box");
        remove(&mut el, "active");
        assert_eq!(el.class_name(), " box");
    }

    #[test]
    fn remove_is_not_token_aware() {
        let mut el = Element::new("toolbox");
        remove(&mut el, "box");
        assert_eq!(el.class_name(), "tool");
    }

    #[test]
    fn repeated_add_does_not_duplicate() {
        let mut el = Element::new("menu active");
        add(&mut el, "active");
        assert_eq!(el.class_name(), "menu active");
    }

    #[test]
    fn add_moves_class_to_the_end() {
        let mut el = Element::new("a active b");
        add(&mut el, "active");
        assert_eq!(el.class_name(), "a b active");
    }

    #[test]
    fn toggle_substring_detection_can_false_positive() {
        // "foo" is detected inside "foobar", so toggle removes instead of
        // adding, leaving a mangled class-name string.
        let mut el = Element::new("foobar");
        toggle(&mut el, "foo");
        assert_eq!(el.class_name(), "bar");
    }

    #[test]
    fn toggle_adds_when_absent_and_removes_when_present() {
        let mut el = Element::new("box");
        toggle(&mut el, "active");
        assert_eq!(el.class_name(), "box active");
        toggle(&mut el, "active");
        assert_eq!(el.class_name(), "box");
    }
}
