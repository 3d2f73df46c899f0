use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\{?\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}?\}\}").expect("placeholder pattern is valid")
});

/// Substitute `{{name}}` (or `{{{name}}}`) placeholders. Values are inserted
/// verbatim; unknown names render as nothing.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let out = render_template(
            "Minutes for {{date}} by {{ scribe }}: {{{content}}}",
            &[("date", "2013-02-05"), ("scribe", "Dave"), ("content", "<b>x</b>")],
        );
        assert_eq!(out, "Minutes for 2013-02-05 by Dave: <b>x</b>");
    }

    #[test]
    fn test_unknown_placeholder_is_blank() {
        assert_eq!(render_template("[{{missing}}]", &[]), "[]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render_template("{{a}}", &[("a", "{{b}}"), ("b", "nope")]);
        assert_eq!(out, "{{b}}");
    }
}
