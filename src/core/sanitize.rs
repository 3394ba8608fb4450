// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Record key from a detail-page label: trimmed, lowercased, spaces to underscores.
/// "Phone Number" → "phone_number".
pub fn field_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Keep digits, plus a `+` only while no digit has been kept yet.
/// "+255 (0) 712-345" → "+2550712345"
pub fn dialable(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == '+' && out.is_empty() {
            out.push(ch);
        }
    }
    out
}
