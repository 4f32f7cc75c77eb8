/// Raw (still URI-encoded) value of cookie `name` in a `document.cookie`
/// string. Decoding is left to the caller, which owns the JS runtime.
pub fn find_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// `document.cookie` assignment string for a path-wide cookie.
/// `encoded_value` must already be URI-encoded.
pub fn cookie_assignment(name: &str, encoded_value: &str, max_age_days: u32) -> String {
    let max_age = u64::from(max_age_days) * 24 * 60 * 60;
    format!("{name}={encoded_value}; max-age={max_age}; path=/; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_name_only() {
        let header = "csrftokenx=no; csrftoken=abc%20def; utm_source=ig";
        assert_eq!(find_cookie(header, "csrftoken"), Some("abc%20def"));
        assert_eq!(find_cookie(header, "utm_source"), Some("ig"));
        assert_eq!(find_cookie(header, "utm_medium"), None);
        assert_eq!(find_cookie("", "csrftoken"), None);
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(find_cookie("t=a=b", "t"), Some("a=b"));
    }

    #[test]
    fn assignment_uses_seconds() {
        assert_eq!(
            cookie_assignment("utm_source", "ig", 30),
            "utm_source=ig; max-age=2592000; path=/; SameSite=Lax"
        );
    }
}
