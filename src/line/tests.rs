use super::*;

type Out = Vec<u8, 256>;

fn typed<const L: usize>(text: &[u8]) -> EditLine<L> {
    let mut line = EditLine::new();
    let mut out = Out::new();
    for &b in text {
        line.insert(b, &mut out).unwrap();
    }
    line
}

fn render<const L: usize>(
    line: &mut EditLine<L>,
    op: impl FnOnce(&mut EditLine<L>, &mut Out) -> Result<Edit, crate::io::Error>,
) -> (Edit, Out) {
    let mut out = Out::new();
    let edit = op(line, &mut out).unwrap();
    (edit, out)
}

#[test]
fn test_insert_appends_and_echoes() {
    let mut line: EditLine<16> = EditLine::new();
    let (edit, out) = render(&mut line, |l, o| l.insert(b'x', o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(&out[..], b"x");
    assert_eq!(line.as_bytes(), b"x");
    assert_eq!(line.cursor(), 1);
}

#[test]
fn test_insert_in_middle_shifts_tail() {
    let mut line: EditLine<16> = typed(b"held");
    render(&mut line, |l, o| l.cursor_left(o));
    render(&mut line, |l, o| l.cursor_left(o));

    let (_, out) = render(&mut line, |l, o| l.insert(b'l', o));
    assert_eq!(&out[..], b"lld\x08\x08");
    assert_eq!(line.as_bytes(), b"helld");
    assert_eq!(line.cursor(), 3);
}

#[test]
fn test_insert_into_full_line_rings_bell() {
    let mut line: EditLine<4> = typed(b"abc");
    assert!(line.is_full());

    let (edit, out) = render(&mut line, |l, o| l.insert(b'd', o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(&out[..], &[term::BEL]);
    assert_eq!(line.as_bytes(), b"abc");
    assert_eq!(line.cursor(), 3);
}

#[test]
fn test_refused_edit_is_silent_without_bell() {
    let mut line: EditLine<16> = EditLine::new();
    line.set_bell(false);

    let (edit, out) = render(&mut line, |l, o| l.backspace(o));
    assert_eq!(edit, Edit::Refused);
    assert!(out.is_empty());
}

#[test]
fn test_backspace_at_end() {
    let mut line: EditLine<16> = typed(b"abc");
    let (edit, out) = render(&mut line, |l, o| l.backspace(o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(&out[..], b"\x08 \x08");
    assert_eq!(line.as_bytes(), b"ab");
    assert_eq!(line.cursor(), 2);
}

#[test]
fn test_backspace_in_middle() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.cursor_left(o));

    let (_, out) = render(&mut line, |l, o| l.backspace(o));
    assert_eq!(&out[..], b"\x08c \x08\x08");
    assert_eq!(line.as_bytes(), b"ac");
    assert_eq!(line.cursor(), 1);
}

#[test]
fn test_backspace_at_start_is_refused() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.line_head(o));

    let (edit, out) = render(&mut line, |l, o| l.backspace(o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(&out[..], &[term::BEL]);
    assert_eq!(line.as_bytes(), b"abc");
}

#[test]
fn test_delete_under_cursor() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.line_head(o));
    render(&mut line, |l, o| l.cursor_right(o));

    let (edit, out) = render(&mut line, |l, o| l.delete(o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(&out[..], b"c \x08\x08");
    assert_eq!(line.as_bytes(), b"ac");
    assert_eq!(line.cursor(), 1);
}

#[test]
fn test_delete_at_end_is_refused() {
    let mut line: EditLine<16> = typed(b"abc");
    let (edit, _) = render(&mut line, |l, o| l.delete(o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(line.as_bytes(), b"abc");
}

#[test]
fn test_kill_line_blanks_visible_text() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.cursor_left(o));
    render(&mut line, |l, o| l.cursor_left(o));

    let (edit, out) = render(&mut line, |l, o| l.kill_line(o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(&out[..], b"\x08   \x08\x08\x08");
    assert!(line.is_empty());
    assert_eq!(line.cursor(), 0);
}

#[test]
fn test_cursor_moves_and_boundaries() {
    let mut line: EditLine<16> = typed(b"ab");

    let (edit, _) = render(&mut line, |l, o| l.cursor_right(o));
    assert_eq!(edit, Edit::Refused);

    let (_, out) = render(&mut line, |l, o| l.cursor_left(o));
    assert_eq!(&out[..], b"\x08");
    let (_, out) = render(&mut line, |l, o| l.cursor_left(o));
    assert_eq!(&out[..], b"\x08");
    assert_eq!(line.cursor(), 0);

    let (edit, _) = render(&mut line, |l, o| l.cursor_left(o));
    assert_eq!(edit, Edit::Refused);

    let (_, out) = render(&mut line, |l, o| l.cursor_right(o));
    assert_eq!(&out[..], b"a");
    assert_eq!(line.cursor(), 1);
}

#[test]
fn test_line_head_and_tail() {
    let mut line: EditLine<16> = typed(b"abc");

    let (_, out) = render(&mut line, |l, o| l.line_head(o));
    assert_eq!(&out[..], b"\x08\x08\x08");
    assert_eq!(line.cursor(), 0);

    let (_, out) = render(&mut line, |l, o| l.line_tail(o));
    assert_eq!(&out[..], b"abc");
    assert_eq!(line.cursor(), 3);
}

#[test]
fn test_kill_tail_then_yank_restores_tail() {
    let mut line: EditLine<32> = typed(b"hello world");
    for _ in 0..6 {
        render(&mut line, |l, o| l.cursor_left(o));
    }

    let (edit, out) = render(&mut line, |l, o| l.kill_tail(o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(&out[..], b"      \x08\x08\x08\x08\x08\x08");
    assert_eq!(line.as_bytes(), b"hello");
    assert_eq!(line.clipboard(), b" world");

    render(&mut line, |l, o| l.yank(o));
    assert_eq!(line.as_bytes(), b"hello world");
    assert_eq!(line.cursor(), 11);
}

#[test]
fn test_kill_tail_at_end_empties_clipboard() {
    let mut line: EditLine<32> = typed(b"abc");
    render(&mut line, |l, o| l.line_head(o));
    render(&mut line, |l, o| l.kill_tail(o));
    assert_eq!(line.clipboard(), b"abc");

    let (edit, out) = render(&mut line, |l, o| l.kill_tail(o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(&out[..], &[term::BEL]);
    assert!(line.clipboard().is_empty());
}

#[test]
fn test_kill_word_takes_trailing_spaces() {
    let mut line: EditLine<32> = typed(b"echo hello  ");

    let (edit, _) = render(&mut line, |l, o| l.kill_word(o));
    assert_eq!(edit, Edit::Done);
    assert_eq!(line.as_bytes(), b"echo ");
    assert_eq!(line.cursor(), 5);
    assert_eq!(line.clipboard(), b"hello  ");
}

#[test]
fn test_kill_word_then_yank_restores_line() {
    let mut line: EditLine<32> = typed(b"set led on");
    for _ in 0..3 {
        render(&mut line, |l, o| l.cursor_left(o));
    }

    render(&mut line, |l, o| l.kill_word(o));
    assert_eq!(line.as_bytes(), b"set  on");
    assert_eq!(line.clipboard(), b"led");

    render(&mut line, |l, o| l.yank(o));
    assert_eq!(line.as_bytes(), b"set led on");
    assert_eq!(line.cursor(), 7);
}

#[test]
fn test_kill_word_single_word() {
    let mut line: EditLine<32> = typed(b"reboot");
    render(&mut line, |l, o| l.kill_word(o));
    assert!(line.is_empty());
    assert_eq!(line.clipboard(), b"reboot");
}

#[test]
fn test_kill_word_at_start_is_refused() {
    let mut line: EditLine<32> = EditLine::new();
    let (edit, out) = render(&mut line, |l, o| l.kill_word(o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(&out[..], &[term::BEL]);
}

#[test]
fn test_yank_empty_clipboard_is_refused() {
    let mut line: EditLine<32> = typed(b"abc");
    let (edit, _) = render(&mut line, |l, o| l.yank(o));
    assert_eq!(edit, Edit::Refused);
    assert_eq!(line.as_bytes(), b"abc");
}

#[test]
fn test_yank_stops_when_line_fills() {
    let mut line: EditLine<6> = typed(b"xyz");
    render(&mut line, |l, o| l.line_head(o));
    render(&mut line, |l, o| l.kill_tail(o));
    for &b in b"abc" {
        render(&mut line, |l, o| l.insert(b, o));
    }

    let (_, out) = render(&mut line, |l, o| l.yank(o));
    assert_eq!(line.as_bytes(), b"abcxy");
    assert_eq!(&out[..], b"xy\x07");
}

#[test]
fn test_clear_screen_repaints_without_touching_state() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.cursor_left(o));
    render(&mut line, |l, o| l.cursor_left(o));

    let (_, out) = render(&mut line, |l, o| l.clear_screen(b"> ", o));
    let mut expected = Out::new();
    expected.extend_from_slice(b"\x08").unwrap();
    expected.extend_from_slice(term::CLEAR_SCREEN).unwrap();
    expected.extend_from_slice(b"> abc\x08\x08").unwrap();
    assert_eq!(out, expected);
    assert_eq!(line.as_bytes(), b"abc");
    assert_eq!(line.cursor(), 1);
}

#[test]
fn test_replace_with() {
    let mut line: EditLine<16> = typed(b"ab");
    let (_, out) = render(&mut line, |l, o| l.replace_with(b"xyz", o));
    assert_eq!(&out[..], b"\x08\x08  \x08\x08xyz");
    assert_eq!(line.as_bytes(), b"xyz");
    assert_eq!(line.cursor(), 3);
}

#[test]
fn test_clear_keeps_clipboard() {
    let mut line: EditLine<16> = typed(b"abc");
    render(&mut line, |l, o| l.kill_word(o));
    for &b in b"def" {
        render(&mut line, |l, o| l.insert(b, o));
    }
    line.clear();
    assert!(line.is_empty());
    assert_eq!(line.clipboard(), b"abc");
}
