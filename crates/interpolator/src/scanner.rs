//! Call scanner: finds inline `name(...)` call expressions in text.

use std::ops::Range;

/// A recognized call occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch<'t> {
    /// Raw argument substring between the parentheses, untrimmed.
    pub args: &'t str,
    /// Byte span of the full `name(...)` expression, parentheses included.
    pub span: Range<usize>,
}

/// Find the first occurrence of `name` immediately followed by a
/// parenthesized argument list.
///
/// The argument list is assumed flat: the span ends at the first `)` after
/// the opening parenthesis, so a nested `(` in the arguments yields a
/// truncated span. The closing `)` must appear on the same line; an
/// occurrence with no close parenthesis is skipped, not reported as a
/// partial span.
pub fn find_call<'t>(text: &'t str, name: &str) -> Option<CallMatch<'t>> {
    if name.is_empty() {
        return None;
    }

    for (start, _) in text.match_indices(name) {
        let open = start + name.len();
        if text.as_bytes().get(open) != Some(&b'(') {
            continue;
        }

        let rest = &text[open + 1..];
        let close_rel = match rest.find(|c| c == ')' || c == '\n') {
            Some(i) if rest.as_bytes()[i] == b')' => i,
            _ => continue,
        };

        let close = open + 1 + close_rel;
        return Some(CallMatch {
            args: &text[open + 1..close],
            span: start..close + 1,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_with_span() {
        let text = "Your total is calculate_total_expenses() USD.";
        let m = find_call(text, "calculate_total_expenses").unwrap();

        assert_eq!(m.args, "");
        assert_eq!(&text[m.span.clone()], "calculate_total_expenses()");
        assert_eq!(m.span, 14..40);
    }

    #[test]
    fn test_args_substring() {
        let text = "log_expense(50.0, 'Food', 'Groceries') done";
        let m = find_call(text, "log_expense").unwrap();

        assert_eq!(m.args, "50.0, 'Food', 'Groceries'");
        assert_eq!(&text[m.span.clone()], "log_expense(50.0, 'Food', 'Groceries')");
    }

    #[test]
    fn test_name_without_parens_is_not_a_match() {
        assert!(find_call("calculate_total_expenses please", "calculate_total_expenses").is_none());
        assert!(find_call("calculate_total_expenses ()", "calculate_total_expenses").is_none());
    }

    #[test]
    fn test_missing_close_paren_is_skipped() {
        assert!(find_call("log_expense(50.0, 'Food'", "log_expense").is_none());
    }

    #[test]
    fn test_close_paren_must_be_on_same_line() {
        let text = "log_expense(50.0,\n'Food')";
        assert!(find_call(text, "log_expense").is_none());
    }

    #[test]
    fn test_unclosed_occurrence_then_closed_one() {
        let text = "log_expense(broken\nlog_expense(1.0, 'A', 'B')";
        let m = find_call(text, "log_expense").unwrap();
        assert_eq!(m.args, "1.0, 'A', 'B'");
        assert_eq!(&text[m.span.clone()], "log_expense(1.0, 'A', 'B')");
    }

    #[test]
    fn test_nested_paren_truncates_span() {
        // Flat-argument limitation: the span ends at the first `)`.
        let text = "get_exchange_rate(round(1), 'EUR')";
        let m = find_call(text, "get_exchange_rate").unwrap();
        assert_eq!(m.args, "round(1");
        assert_eq!(&text[m.span.clone()], "get_exchange_rate(round(1)");
    }

    #[test]
    fn test_first_of_multiple_occurrences() {
        let text = "a() then a() again";
        let m = find_call(text, "a").unwrap();
        assert_eq!(m.span, 0..3);
    }
}
