use trellis_dom::text::{align_offset, char_width, display_width, truncate_to_width};
use trellis_dom::TextAlign;

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('a'), 1);
}

#[test]
fn test_truncate_noop_when_it_fits() {
    assert_eq!(truncate_to_width("abc", 5), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    assert_eq!(truncate_to_width("abcdef", 1), "…");
    assert_eq!(truncate_to_width("abcdef", 0), "");
}

#[test]
fn test_truncate_respects_wide_chars() {
    // Each char is 2 cells; 5 cells fit two chars plus the ellipsis
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}
