//! Keystroke gates for the text fields of the form.
//!
//! Both predicates look at the full text a field would contain after the
//! keystroke, not at the typed character alone. They only check that the
//! text is still on its way to a number: `"-"` and `"3."` pass here and are
//! rejected later by the parse step of `Form::calculate`.

/// True iff `proposed` only contains `0-9`, `.` and `-`, has at most one `.`
/// and has a `-` nowhere but at the first position.
pub fn is_valid_float_text(proposed: &str) -> bool {
    let mut dots = 0;
    for (i, c) in proposed.chars().enumerate() {
        match c {
            '0'..='9' => {}
            '.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            '-' if i == 0 => {}
            _ => return false,
        }
    }
    true
}

/// True iff `proposed` is empty or consists of decimal digits only.
/// Only the ASCII digits `0-9` count, other Unicode decimal digits are rejected.
pub fn is_valid_int_text(proposed: &str) -> bool {
    proposed.chars().all(|c| c.is_ascii_digit())
}
