use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out an element tree into `id -> Rect`, top-down in a single pass.
///
/// Fixed and auto-sized children are measured first; the remaining main-axis
/// space is split between `Fill`/`Flex` children proportionally to their
/// weights (`Fill` counts as weight 1).
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    // Margin shrinks available space and offsets position
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };

    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed and auto sizes, total flex weight
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;
    let mut fixed_total = 0u16;
    let mut flex_total = 0u32;

    for child in children {
        let child_margin_main = if is_row {
            child.margin.horizontal_total()
        } else {
            child.margin.vertical_total()
        };
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total += n + child_margin_main,
            Size::Auto => fixed_total += estimate_size(child, is_row) + child_margin_main,
            Size::Fill => {
                flex_total += 1;
                fixed_total += child_margin_main;
            }
            Size::Flex(w) => {
                flex_total += w.max(1) as u32;
                fixed_total += child_margin_main;
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total) as u32;

    // Second pass: place children along the main axis
    let mut offset = 0u16;
    let mut flex_used = 0u32;
    let mut flex_seen = 0u32;

    for child in children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };
        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_main = if is_row { child.width } else { child.height };
        let main = match child_main {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill | Size::Flex(_) => {
                let weight = match child_main {
                    Size::Flex(w) => w.max(1) as u32,
                    _ => 1,
                };
                flex_seen += weight;
                // Cumulative rounding keeps the shares summing to `remaining`
                let share = (remaining * flex_seen / flex_total.max(1)) - flex_used;
                flex_used += share;
                share as u16
            }
        };

        let child_align = element.align;
        let available_cross = cross_size.saturating_sub(cross_margin_before + cross_margin_after);
        let child_cross = if is_row { child.height } else { child.width };
        let cross = match child_cross {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => available_cross,
            Size::Auto => {
                if child_align == Align::Stretch {
                    available_cross
                } else {
                    estimate_size(child, !is_row).min(available_cross)
                }
            }
        };

        let clamped_main = main.min(main_size.saturating_sub(offset.saturating_add(margin_before)));
        let clamped_cross = cross.min(available_cross);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_margin_before,
            Align::Center => {
                cross_margin_before + available_cross.saturating_sub(clamped_cross) / 2
            }
            Align::End => cross_margin_before + available_cross.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + margin_before,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset + margin_before,
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += margin_before + main + margin_after + element.gap;
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Content-based size estimate for `Size::Auto`.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border_size = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let text_width = display_width(value)
                    .max(placeholder.as_deref().map(display_width).unwrap_or(0));
                // One extra cell for the end-of-line cursor
                text_width as u16 + 1
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along the main axis
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along the cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border_size
}
