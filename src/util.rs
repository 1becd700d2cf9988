/// Visible length of a string (strips ANSI escape sequences).
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for ch in s.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

/// Pad a string to a given visible width (right-padded).
pub fn pad_right(s: &str, width: usize) -> String {
    let vis = visible_len(s);
    if vis >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - vis))
    }
}

/// Pad a string to a given visible width (left-padded).
pub fn pad_left(s: &str, width: usize) -> String {
    let vis = visible_len(s);
    if vis >= width {
        s.to_string()
    } else {
        format!("{}{s}", " ".repeat(width - vis))
    }
}

/// Spell out ESC as `\x1b` so an escape sequence can be shown as plain text.
pub fn escape_visible(s: &str) -> String {
    s.replace('\x1b', "\\x1b")
}
