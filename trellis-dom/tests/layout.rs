use trellis_dom::{layout, Border, Color, Edges, Element, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> trellis_dom::LayoutResult {
    layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_fixed_size() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(20));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();
    assert_eq!((rect.width, rect.height), (50, 20));
}

#[test]
fn test_fixed_size_clamped_to_available() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(200))
        .height(Size::Fixed(5));

    let layout = layout_root(&root, 80, 24);
    let rect = layout.get("root").unwrap();
    assert_eq!(rect.width, 80);
}

#[test]
fn test_fill_splits_remaining_equally() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Fill))
        .child(Element::box_().id("b").width(Size::Fill));

    let layout = layout_root(&root, 40, 1);
    assert_eq!(layout.get("a").unwrap().width, 20);
    assert_eq!(layout.get("b").unwrap().width, 20);
}

#[test]
fn test_flex_weights_are_honored() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Flex(1)))
        .child(Element::box_().id("b").width(Size::Flex(2)));

    let layout = layout_root(&root, 30, 1);
    assert_eq!(layout.get("a").unwrap().width, 10);
    assert_eq!(layout.get("b").unwrap().width, 20);
}

#[test]
fn test_flex_shares_exhaust_remaining_space() {
    // 31 cells over three weight-1 children: shares still sum to 31
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(31))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Fill))
        .child(Element::box_().id("b").width(Size::Fill))
        .child(Element::box_().id("c").width(Size::Fill));

    let layout = layout_root(&root, 31, 1);
    let total: u16 = ["a", "b", "c"]
        .iter()
        .map(|id| layout.get(*id).unwrap().width)
        .sum();
    assert_eq!(total, 31);
}

#[test]
fn test_fixed_children_reduce_flex_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(1))
        .child(Element::box_().id("fixed").width(Size::Fixed(10)))
        .child(Element::box_().id("flex").width(Size::Fill));

    let layout = layout_root(&root, 50, 1);
    assert_eq!(layout.get("flex").unwrap().width, 40);
    assert_eq!(layout.get("flex").unwrap().x, 10);
}

#[test]
fn test_auto_sizes_to_text() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(10))
        .child(Element::text("hello").id("t"));

    let layout = layout_root(&root, 40, 10);
    let rect = layout.get("t").unwrap();
    assert_eq!(rect.width, 5);
    assert_eq!(rect.height, 1);
}

// ============================================================================
// Position: stacking, gap, padding, border, margin
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::box_().id("a").height(Size::Fixed(2)))
        .child(Element::box_().id("b").height(Size::Fixed(3)))
        .child(Element::box_().id("c").height(Size::Fixed(1)));

    let layout = layout_root(&root, 10, 10);
    assert_eq!(layout.get("a").unwrap().y, 0);
    assert_eq!(layout.get("b").unwrap().y, 2);
    assert_eq!(layout.get("c").unwrap().y, 5);
}

#[test]
fn test_gap_between_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .gap(1)
        .child(Element::box_().id("a").height(Size::Fixed(2)))
        .child(Element::box_().id("b").height(Size::Fixed(2)));

    let layout = layout_root(&root, 10, 10);
    assert_eq!(layout.get("b").unwrap().y, 3);
}

#[test]
fn test_padding_insets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .padding(Edges::new(1, 2, 1, 3))
        .child(Element::box_().id("child").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 20, 10);
    let child = layout.get("child").unwrap();
    assert_eq!(child.x, 3);
    assert_eq!(child.y, 1);
    assert_eq!(child.width, 15); // 20 - 3 - 2
    assert_eq!(child.height, 8); // 10 - 1 - 1
}

#[test]
fn test_border_insets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .style(Style::new().border(Border::Single).border_color(Color::rgb(0, 0, 0)))
        .child(Element::box_().id("child").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 20, 10);
    let child = layout.get("child").unwrap();
    assert_eq!((child.x, child.y), (1, 1));
    assert_eq!((child.width, child.height), (18, 8));
}

#[test]
fn test_margin_offsets_element() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .margin(Edges::all(2));

    let layout = layout_root(&root, 20, 10);
    let rect = layout.get("root").unwrap();
    assert_eq!((rect.x, rect.y), (2, 2));
    assert_eq!((rect.width, rect.height), (16, 6));
}

#[test]
fn test_child_margin_in_column() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(
            Element::box_()
                .id("a")
                .height(Size::Fixed(2))
                .margin(Edges::new(1, 0, 1, 0)),
        )
        .child(Element::box_().id("b").height(Size::Fixed(2)));

    let layout = layout_root(&root, 10, 10);
    assert_eq!(layout.get("a").unwrap().y, 1);
    assert_eq!(layout.get("b").unwrap().y, 4); // 1 + 2 + 1
}
