pub fn is_single_line(text: &str) -> bool {
    !text.contains(|c| c == '\n' || c == '\r')
}

/// Splits `text` on `\n`, `\r\n` and lone `\r`. A trailing line break does
/// not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(text[start..i].to_string());
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

/// Inserted replacement text is never rescanned. `None` when nothing
/// matched; an empty `search` never matches.
pub fn replace_in_line(line: &str, search: &str, replacement: &str) -> Option<(String, usize)> {
    if search.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(line.len());
    let mut last_end = 0;
    let mut count = 0;
    for (start, matched) in line.match_indices(search) {
        result.push_str(&line[last_end..start]);
        result.push_str(replacement);
        last_end = start + matched.len();
        count += 1;
    }

    if count == 0 {
        return None;
    }

    result.push_str(&line[last_end..]);
    Some((result, count))
}
