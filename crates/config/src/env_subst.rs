/// Replace `${ENV_VAR}` placeholders in config string values.
///
/// Unresolvable variables are left as-is.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

/// Replace `${ENV_VAR}` placeholders using a custom lookup function.
///
/// This is the implementation used by [`substitute_env`]; the separate
/// signature makes it testable without mutating the process environment.
fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => result.push_str(&value),
                    None => {
                        // Leave unresolved placeholder as-is.
                        result.push_str("${");
                        result.push_str(name);
                        result.push('}');
                    },
                }
                rest = &after[end + 1..];
            },
            _ => {
                // Unterminated or empty placeholder — emit literally.
                result.push_str("${");
                rest = after;
            },
        }
    }

    result.push_str(rest);
    result
}
