//! Live input mask for Ukrainian mobile numbers: `+38(0XX)XXX-XX-XX`.
//!
//! The `+38` prefix is locked once the field is touched: deleting into it is
//! blocked and an emptied field snaps back to the bare prefix.

use crate::constants::{PHONE_COUNTRY_DIGITS, PHONE_MASK_MAX_LEN, PHONE_PREFIX};

/// Characters the mask inserts between digit groups.
const MASK_PUNCTUATION: &[char] = &['(', ')', '-', ' '];

/// Result of a backspace/delete keystroke on the masked field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteAction {
    /// Swallow the keystroke; the prefix stays intact.
    Block,
    /// Replace the field value and move the caret (char offset).
    Replace { value: String, caret: usize },
    /// Let the browser edit; the following input event reformats.
    Default,
}

#[inline]
fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[inline]
fn prefix_chars() -> usize {
    PHONE_PREFIX.chars().count()
}

/// Reformat whatever the field holds into the mask.
pub fn format_phone(raw: &str) -> String {
    let mut digits = digits_of(raw);
    if digits.is_empty() {
        return PHONE_PREFIX.to_string();
    }
    if !digits.starts_with(PHONE_COUNTRY_DIGITS) {
        digits.insert_str(0, PHONE_COUNTRY_DIGITS);
    }

    let national = &digits[PHONE_COUNTRY_DIGITS.len()..];
    let mut out = String::with_capacity(PHONE_MASK_MAX_LEN + 1);
    out.push('+');
    out.push_str(PHONE_COUNTRY_DIGITS);

    // (0XX)
    if national.len() < 3 {
        out.push_str(national);
    } else {
        out.push('(');
        out.push_str(&national[..3]);
        out.push(')');
        // XXX-
        let rest = &national[3..];
        if rest.len() < 3 {
            out.push_str(rest);
        } else {
            out.push_str(&rest[..3]);
            out.push('-');
            // XX-XX
            let rest = &rest[3..];
            if rest.len() < 2 {
                out.push_str(rest);
            } else {
                out.push_str(&rest[..2]);
                out.push('-');
                out.push_str(&rest[2..]);
            }
        }
    }

    out.truncate(PHONE_MASK_MAX_LEN);
    out
}

/// Value to show when the field gains focus.
pub fn on_focus(value: &str) -> String {
    if value.is_empty() {
        PHONE_PREFIX.to_string()
    } else if value.starts_with(PHONE_PREFIX) {
        value.to_string()
    } else {
        format_phone(value)
    }
}

/// The caret may never sit inside the prefix.
#[inline]
pub fn clamp_caret(caret: usize) -> usize {
    caret.max(prefix_chars())
}

/// Char offset right after the `n`-th digit of `formatted`, or its end.
fn caret_after_digits(formatted: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in formatted.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == n {
                return i + 1;
            }
        }
    }
    formatted.chars().count()
}

/// Backspace/delete with the caret at char offset `caret`.
///
/// A mask punctuation character before the caret goes together with the
/// digit before it, as one edit unit.
pub fn delete_backward(value: &str, caret: usize) -> DeleteAction {
    let prefix = prefix_chars();
    if caret <= prefix {
        return DeleteAction::Block;
    }
    let chars: Vec<char> = value.chars().collect();
    let caret = caret.min(chars.len());
    let Some(&before) = chars.get(caret.wrapping_sub(1)) else {
        return DeleteAction::Default;
    };
    if !MASK_PUNCTUATION.contains(&before) {
        return DeleteAction::Default;
    }
    // punctuation right after the prefix: nothing editable to pair with
    if caret - 1 <= prefix {
        return DeleteAction::Block;
    }

    let mut cut = caret - 1;
    if chars[cut - 1].is_ascii_digit() {
        cut -= 1;
    }
    let digits_before = chars[..cut].iter().filter(|c| c.is_ascii_digit()).count();
    let edited: String = chars[..cut].iter().chain(chars[caret..].iter()).collect();
    let value = format_phone(&edited);
    let caret = clamp_caret(caret_after_digits(&value, digits_before));
    DeleteAction::Replace { value, caret }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_national_number() {
        assert_eq!(format_phone("0991234567"), "+38(099)123-45-67");
        assert_eq!(format_phone("+38 (099) 123 45 67"), "+38(099)123-45-67");
    }

    #[test]
    fn progressive_checkpoints() {
        assert_eq!(format_phone(""), "+38");
        assert_eq!(format_phone("0"), "+380");
        assert_eq!(format_phone("09"), "+3809");
        assert_eq!(format_phone("099"), "+38(099)");
        assert_eq!(format_phone("09912"), "+38(099)12");
        assert_eq!(format_phone("099123"), "+38(099)123-");
        assert_eq!(format_phone("0991234"), "+38(099)123-4");
        assert_eq!(format_phone("09912345"), "+38(099)123-45-");
    }

    #[test]
    fn truncates_overlong_input() {
        assert_eq!(format_phone("099123456789"), "+38(099)123-45-67");
    }

    #[test]
    fn focus_inserts_prefix() {
        assert_eq!(on_focus(""), "+38");
        assert_eq!(on_focus("+38(09"), "+38(09");
        assert_eq!(on_focus("0991234567"), "+38(099)123-45-67");
    }

    #[test]
    fn backspace_into_prefix_is_blocked() {
        assert_eq!(delete_backward("+38", 3), DeleteAction::Block);
        assert_eq!(delete_backward("+38(099)", 2), DeleteAction::Block);
        assert_eq!(delete_backward("+38(099)", 4), DeleteAction::Block);
    }

    #[test]
    fn backspace_on_dash_takes_preceding_digit() {
        let action = delete_backward("+38(099)123-", 12);
        assert_eq!(
            action,
            DeleteAction::Replace {
                value: "+38(099)12".to_string(),
                caret: 10,
            }
        );
    }

    #[test]
    fn backspace_mid_value_keeps_tail() {
        // caret right after the second dash
        let action = delete_backward("+38(099)123-45-67", 15);
        assert_eq!(
            action,
            DeleteAction::Replace {
                value: "+38(099)123-46-7".to_string(),
                caret: 13,
            }
        );
    }

    #[test]
    fn backspace_on_digit_is_left_to_browser() {
        assert_eq!(delete_backward("+38(099)12", 10), DeleteAction::Default);
    }
}
