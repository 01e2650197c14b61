mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by id anywhere in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Walk the tree and set the `focused` flag on the element with the given
/// id, clearing it everywhere else. Hosts call this before rendering so
/// `style_focused` overlays and input cursors follow the focus ring.
pub fn apply_focus(root: &mut Element, focused: Option<&str>) {
    root.focused = focused == Some(root.id.as_str());
    if let Content::TextInput { focused: f, .. } = &mut root.content {
        *f = root.focused;
    }
    if let Content::Children(children) = &mut root.content {
        for child in children {
            apply_focus(child, focused);
        }
    }
}
