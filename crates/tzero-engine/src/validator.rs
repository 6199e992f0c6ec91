//! Script validation for the programming levels.
//!
//! Two stages: a lightweight syntax scan (balanced brackets, terminated
//! strings, comment awareness) followed by per-level requirement checks.
//! The checks are deliberately shallow text matching; nothing here
//! executes user code.

/// Outcome of validating a user script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the code passed the syntax scan.
    pub is_valid: bool,
    /// Whether the code satisfies the level's requirements.
    /// Invariant: `meets_requirements` implies `is_valid`.
    pub meets_requirements: bool,
    /// Feedback shown to the player.
    pub feedback: String,
}

impl Validation {
    fn invalid(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            meets_requirements: false,
            feedback: feedback.into(),
        }
    }

    fn incomplete(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            meets_requirements: false,
            feedback: feedback.into(),
        }
    }

    fn success(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            meets_requirements: true,
            feedback: feedback.into(),
        }
    }
}

/// Whether `level` has a validator-backed script challenge.
pub fn has_validator(level: u32) -> bool {
    matches!(level, 10..=13)
}

/// Validate `code` against the requirements of `level`.
pub fn validate_level_solution(level: u32, code: &str) -> Validation {
    log::debug!("validating code for level {level}, length {}", code.len());

    if code.is_empty() {
        return Validation::invalid("No code provided for validation");
    }

    if let Err(message) = check_syntax(code) {
        log::debug!("syntax scan failed for level {level}: {message}");
        return Validation::invalid(format!("Your code has a syntax error: {message}"));
    }

    match level {
        10 => validate_level_10(code),
        11 => validate_level_11(code),
        12 => validate_level_12(code),
        13 => validate_level_13(code),
        _ => Validation::success("Code looks good!"),
    }
}

/// Shallow JavaScript syntax scan.
///
/// Tracks bracket nesting and string/comment state. Catches the mistakes
/// players actually make in an editor this small: an unclosed brace,
/// paren, bracket, or string literal.
fn check_syntax(code: &str) -> Result<(), String> {
    let mut stack: Vec<char> = Vec::new();
    let mut chars = code.chars().peekable();
    // Some(quote char) while inside a string or template literal.
    let mut in_string: Option<char> = None;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(c) = chars.next() {
        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
            }
            continue;
        }
        if in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block_comment = false;
            }
            continue;
        }
        if let Some(quote) = in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '\n' if quote != '`' => {
                    return Err("unterminated string literal".to_string());
                }
                _ if c == quote => in_string = None,
                _ => {}
            }
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'/') => in_line_comment = true,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                in_block_comment = true;
            }
            '\'' | '"' | '`' => in_string = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some(open) if open == expected => {}
                    Some(open) => {
                        return Err(format!("mismatched '{open}' closed by '{c}'"));
                    }
                    None => return Err(format!("unexpected '{c}'")),
                }
            }
            _ => {}
        }
    }

    if in_string.is_some() {
        return Err("unterminated string literal".to_string());
    }
    if in_block_comment {
        return Err("unterminated block comment".to_string());
    }
    if let Some(open) = stack.pop() {
        let close = match open {
            '(' => ')',
            '[' => ']',
            _ => '}',
        };
        return Err(format!("missing closing '{close}'"));
    }
    Ok(())
}

fn strip_whitespace(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

// Level 10: fix the add function.
fn validate_level_10(code: &str) -> Validation {
    if strip_whitespace(code).contains("returna+b") {
        Validation::success(
            "Excellent! You've successfully fixed the add function. It now correctly returns a + b instead of a - b.",
        )
    } else {
        Validation::incomplete(
            "The function still doesn't work correctly. It should add the numbers, not subtract them. Use 'edit script.js' to edit it again.",
        )
    }
}

// Level 11: reverse the array.
fn validate_level_11(code: &str) -> Validation {
    if code.contains("numbers.reverse()") || strip_whitespace(code).contains("numbers.reverse()") {
        Validation::success(
            "Great job! You've successfully used the array.reverse() method to reverse the array.",
        )
    } else {
        Validation::incomplete(
            "The array hasn't been reversed correctly. Make sure to use 'numbers.reverse()' to reverse the array.",
        )
    }
}

// Level 12: parse JSON. Checks run in order so the feedback names the
// first missing element.
fn validate_level_12(code: &str) -> Validation {
    if !code.contains("JSON.parse") {
        return Validation::incomplete(
            "Your script doesn't use JSON.parse() to parse the JSON data. Try again.",
        );
    }
    if !code.contains("data.json") {
        return Validation::incomplete(
            "Your script doesn't read the data.json file. Use fs.readFileSync('data.json') to read the file.",
        );
    }
    if !(code.contains("admin") || code.contains("users")) {
        return Validation::incomplete(
            "Your script doesn't look for the admin user in the users array.",
        );
    }
    if !code.contains("password") {
        return Validation::incomplete(
            "Your script doesn't extract the password from the admin user.",
        );
    }
    Validation::success(
        "Great job! You've successfully parsed the JSON data and extracted the admin password.",
    )
}

// Level 13: extract patterns with regular expressions.
fn validate_level_13(code: &str) -> Validation {
    let uses_regex = ["match", "exec", "test", "search", "replace"]
        .iter()
        .any(|method| code.contains(method));
    if !uses_regex {
        return Validation::incomplete(
            "Your script doesn't appear to use regular expressions. Make sure to use regex patterns with methods like match() or exec() to extract the patterns.",
        );
    }

    let has_email_pattern = code.contains('@') || code.contains("\\w+@\\w+");
    let has_phone_pattern = code.contains("\\d{3}") || code.contains("555-");

    match (has_email_pattern, has_phone_pattern) {
        (false, false) => Validation::incomplete(
            "Your script doesn't have patterns to match both email and phone number formats.",
        ),
        (false, true) => Validation::incomplete(
            "Your script doesn't have a pattern to match email addresses.",
        ),
        (true, false) => Validation::incomplete(
            "Your script doesn't have a pattern to match phone numbers.",
        ),
        (true, true) => Validation::success(
            "Excellent! You've successfully extracted both the email and phone number using regular expressions.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_is_invalid() {
        let v = validate_level_solution(10, "");
        assert!(!v.is_valid);
        assert_eq!(v.feedback, "No code provided for validation");
    }

    #[test]
    fn unbalanced_braces_fail_the_syntax_scan() {
        let v = validate_level_solution(10, "function add(a, b) { return a + b");
        assert!(!v.is_valid);
        assert!(v.feedback.starts_with("Your code has a syntax error:"));
    }

    #[test]
    fn unterminated_string_fails() {
        let v = validate_level_solution(11, "const s = 'oops\nnumbers.reverse()");
        assert!(!v.is_valid);
    }

    #[test]
    fn brackets_inside_strings_and_comments_are_ignored() {
        let code = "// opening { and ( here\nconst s = \"}}]])\";\nreturn a + b;";
        assert!(check_syntax(code).is_ok());
    }

    #[test]
    fn template_literals_may_span_lines() {
        let code = "const t = `line one\nline {two}`;\nnumbers.reverse();";
        assert!(check_syntax(code).is_ok());
    }

    #[test]
    fn level_10_passes_with_any_spacing() {
        for code in [
            "function add(a, b) { return a + b; }",
            "function add(a,b){return a+b}",
            "function add(a, b) {\n  return a  +  b;\n}",
        ] {
            let v = validate_level_solution(10, code);
            assert!(v.meets_requirements, "code: {code}");
        }
    }

    #[test]
    fn level_10_still_subtracting_fails() {
        let v = validate_level_solution(10, "function add(a, b) { return a - b; }");
        assert!(v.is_valid);
        assert!(!v.meets_requirements);
        assert!(v.feedback.contains("edit script.js"));
    }

    #[test]
    fn level_11_needs_reverse_call() {
        let ok = validate_level_solution(11, "const numbers = [1]; numbers.reverse();");
        assert!(ok.meets_requirements);
        let spaced = validate_level_solution(11, "numbers . reverse ( ) ;");
        assert!(spaced.meets_requirements);
        let bad = validate_level_solution(11, "const numbers = [1];");
        assert!(!bad.meets_requirements);
    }

    #[test]
    fn level_12_feedback_names_first_missing_piece() {
        let v = validate_level_solution(12, "const data = 1;");
        assert!(v.feedback.contains("JSON.parse"));
        let v = validate_level_solution(12, "JSON.parse(x)");
        assert!(v.feedback.contains("data.json"));
        let v = validate_level_solution(12, "JSON.parse(fs.readFileSync('data.json'))");
        assert!(v.feedback.contains("admin user in the users array"));
        let v = validate_level_solution(12, "const d = JSON.parse(fs.readFileSync('data.json')); d.users;");
        assert!(v.feedback.contains("password"));
    }

    #[test]
    fn level_12_complete_solution_passes() {
        let code = "const fs = require('fs');\nconst data = JSON.parse(fs.readFileSync('data.json'));\nconst admin = data.users.find(u => u.username === 'admin');\nconsole.log(admin.password);";
        let v = validate_level_solution(12, code);
        assert!(v.meets_requirements);
    }

    #[test]
    fn level_13_needs_regex_method_and_both_patterns() {
        let none = validate_level_solution(13, "const text = 1;");
        assert!(none.feedback.contains("regular expressions"));
        let email_only = validate_level_solution(13, "text.match(/\\w+@\\w+/);");
        assert!(email_only.feedback.contains("phone numbers"));
        let phone_only = validate_level_solution(13, "text.match(/\\d{3}-\\d{4}/);");
        assert!(phone_only.feedback.contains("email addresses"));
        let both = validate_level_solution(13, "text.match(/\\w+@\\w+/); text.match(/\\d{3}-\\d{4}/);");
        assert!(both.meets_requirements);
    }

    #[test]
    fn other_levels_default_to_success() {
        let v = validate_level_solution(42, "console.log('hi');");
        assert!(v.meets_requirements);
        assert_eq!(v.feedback, "Code looks good!");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validator_is_total(level in 0u32..=70, code in ".{0,300}") {
                let v = validate_level_solution(level, &code);
                prop_assert!(!v.feedback.is_empty());
                if v.meets_requirements {
                    prop_assert!(v.is_valid);
                }
            }

            #[test]
            fn balanced_ascii_identifiers_pass_the_scan(code in "[a-z0-9_. ;\n]{0,200}") {
                prop_assert!(check_syntax(&code).is_ok());
            }
        }
    }
}
