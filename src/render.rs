use crate::databases::table::Value;

pub const NULL_MARKER: &str = "(NULL)";
pub const EMPTY_MARKER: &str = "(Empty String)";

/// Text form of a fetched value used both for display and for comparison.
/// NULL, the empty string and any other string never share a rendering.
pub fn render(value: &Value) -> String {
    return match value {
        Value::Null => NULL_MARKER.to_owned(),
        Value::String(s) if s.is_empty() => EMPTY_MARKER.to_owned(),
        Value::String(s) => quote(s),
        Value::I64(v) => quote(&v.to_string()),
    };
}

fn quote(s: &str) -> String {
    return format!("'{}'", s.replace('\'', "''"));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn string(s: &str) -> Value {
        return Value::String(s.to_owned());
    }

    #[rstest]
    #[case(Value::Null, "(NULL)")]
    #[case(string(""), "(Empty String)")]
    #[case(string(" "), "' '")]
    #[case(string("a"), "'a'")]
    #[case(string("a'b"), "'a''b'")]
    #[case(string("''"), "''''''")]
    #[case(Value::I64(-7), "'-7'")]
    fn renders(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(render(&value), expected);
    }

    #[test]
    fn idempotent() {
        for value in [Value::Null, string(""), string(" "), string("a'b")] {
            assert_eq!(render(&value), render(&value));
        }
    }

    #[test]
    fn null_empty_and_strings_are_distinct() {
        let null = render(&Value::Null);
        let empty = render(&string(""));
        for s in [" ", "a", "(NULL)", "(Empty String)", "NULL"] {
            let other = render(&string(s));
            assert_ne!(other, null, "{s:?}");
            assert_ne!(other, empty, "{s:?}");
        }
        assert_ne!(null, empty);
    }
}
