use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, ColorContext, Rgb, Style, TextStyle};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
// Input decorations are fixed contrast pairs, independent of the theme
const PLACEHOLDER_FG: Rgb = Rgb::new(110, 110, 110);
const CURSOR_FG: Rgb = Rgb::new(30, 30, 30);
const CURSOR_BG: Rgb = Rgb::new(215, 215, 215);

/// Render an element tree into a cell buffer.
///
/// Elements draw in tree order (parents first, children over them), each
/// clipped to its parent's rect.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
) {
    let screen = Rect::from_size(buf.width(), buf.height());
    render_element(element, layout, buf, screen, color_ctx);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Rect,
    ctx: &ColorContext,
) {
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };

    let draw = clip.intersect(rect);
    if draw.is_empty() {
        return;
    }

    let style = effective_style(element);

    if let Some(bg) = &style.background {
        fill_rect(buf, draw, ctx.resolve_rgb(bg));
    }

    render_border(&style, rect, buf, draw, ctx);

    match &element.content {
        Content::Text(text) => render_text(element, &style, text, rect, buf, draw, ctx),
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => render_text_input(
            element,
            &style,
            value,
            *cursor,
            placeholder.as_deref(),
            *focused,
            rect,
            buf,
            draw,
            ctx,
        ),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, draw, ctx);
            }
        }
        Content::None => {}
    }
}

/// The element's style with its focus/disabled overlay applied.
fn effective_style(element: &Element) -> Style {
    if element.disabled {
        if let Some(overlay) = &element.style_disabled {
            return element.style.merged(overlay);
        }
    } else if element.focused {
        if let Some(overlay) = &element.style_focused {
            return element.style.merged(overlay);
        }
    }
    element.style.clone()
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text(
    element: &Element,
    style: &Style,
    text: &str,
    rect: Rect,
    buf: &mut Buffer,
    clip: Rect,
    ctx: &ColorContext,
) {
    let inner = content_rect(style, element, rect);
    if inner.is_empty() {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| ctx.resolve_rgb(c))
        .unwrap_or(DEFAULT_FG);
    let bg = style.background.as_ref().map(|c| ctx.resolve_rgb(c));

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }

        let visible = truncate_to_width(line, inner.width as usize);
        let offset = align_offset(
            display_width(&visible),
            inner.width as usize,
            element.text_align,
        );
        let mut x = inner.x + offset as u16;

        for ch in visible.chars() {
            if x >= inner.right() {
                break;
            }
            draw_char(buf, x, y, ch, fg, bg, style.text_style, clip);
            x += char_width(ch) as u16;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    element: &Element,
    style: &Style,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    rect: Rect,
    buf: &mut Buffer,
    clip: Rect,
    ctx: &ColorContext,
) {
    let inner = content_rect(style, element, rect);
    if inner.is_empty() {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| ctx.resolve_rgb(c))
        .unwrap_or(DEFAULT_FG);
    let bg = style.background.as_ref().map(|c| ctx.resolve_rgb(c));

    // Placeholder shows while empty and unfocused
    let is_placeholder = value.is_empty() && !focused;
    let display_text = if is_placeholder {
        placeholder.unwrap_or("")
    } else {
        value
    };

    let chars: Vec<char> = display_text.chars().collect();
    let y = inner.y;
    let visible_width = inner.width as usize;

    // Scroll so the cursor stays visible (one cell reserved for the cursor
    // block at the end of the line)
    let scroll_offset = if focused && !is_placeholder {
        let width_to_cursor: usize = chars
            .iter()
            .take(cursor)
            .map(|&c| char_width(c))
            .sum::<usize>()
            + 1;
        if width_to_cursor > visible_width {
            let overshoot = width_to_cursor - visible_width;
            let mut offset = 0;
            let mut skipped = 0;
            for &ch in &chars {
                if skipped >= overshoot {
                    break;
                }
                skipped += char_width(ch);
                offset += 1;
            }
            offset
        } else {
            0
        }
    } else {
        0
    };

    let mut x = inner.x;
    for (i, &ch) in chars.iter().enumerate().skip(scroll_offset) {
        if x >= inner.right() {
            break;
        }

        let (char_fg, char_bg) = if is_placeholder {
            (PLACEHOLDER_FG, bg)
        } else if focused && i == cursor {
            (CURSOR_FG, Some(CURSOR_BG))
        } else {
            (fg, bg)
        };

        draw_char(buf, x, y, ch, char_fg, char_bg, style.text_style, clip);
        x += char_width(ch) as u16;
    }

    // Cursor block at end of text
    if focused && cursor >= chars.len() {
        let width_to_cursor: usize = chars
            .iter()
            .skip(scroll_offset)
            .map(|&c| char_width(c))
            .sum();
        let cursor_x = inner.x + width_to_cursor as u16;
        if cursor_x < inner.right() {
            draw_char(
                buf,
                cursor_x,
                y,
                ' ',
                CURSOR_FG,
                Some(CURSOR_BG),
                TextStyle::new(),
                clip,
            );
        }
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer, clip: Rect, ctx: &ColorContext) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .border_color
        .as_ref()
        .or(style.foreground.as_ref())
        .map(|c| ctx.resolve_rgb(c))
        .unwrap_or(DEFAULT_FG);

    let set = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
        if clip.contains(x, y) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ch;
                cell.fg = fg;
                cell.wide_continuation = false;
                // Background is preserved
            }
        }
    };

    set(buf, rect.x, rect.y, tl);
    set(buf, rect.right() - 1, rect.y, tr);
    set(buf, rect.x, rect.bottom() - 1, bl);
    set(buf, rect.right() - 1, rect.bottom() - 1, br);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set(buf, x, rect.y, h);
        set(buf, x, rect.bottom() - 1, h);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set(buf, rect.x, y, v);
        set(buf, rect.right() - 1, y, v);
    }
}

fn content_rect(style: &Style, element: &Element, rect: Rect) -> Rect {
    let border_size = if style.border == Border::None { 0 } else { 1 };
    rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_char(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    ch: char,
    fg: Rgb,
    bg: Option<Rgb>,
    text_style: TextStyle,
    clip: Rect,
) {
    if !clip.contains(x, y) {
        return;
    }
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.style = text_style;
        cell.wide_continuation = false;
    }

    // Mark the second column of a double-width character
    if char_width(ch) == 2 {
        let cont_x = x + 1;
        if clip.contains(cont_x, y) {
            if let Some(cell) = buf.get_mut(cont_x, y) {
                cell.char = ' ';
                cell.fg = fg;
                if let Some(bg) = bg {
                    cell.bg = bg;
                }
                cell.style = text_style;
                cell.wide_continuation = true;
            }
        }
    }
}
