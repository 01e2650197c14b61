use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
/// Disabled subtrees don't receive clicks.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.clickable)
}

/// Find the deepest focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.focusable)
}

fn hit_test_by(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    matches: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if element.disabled {
        return None;
    }

    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Children in reverse order: last rendered is on top
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_by(layout, child, x, y, matches) {
                return Some(id);
            }
        }
    }

    if matches(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
