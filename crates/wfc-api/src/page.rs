use std::fmt::Write;

const TEMPLATE: &str = include_str!("../templates/config_app.html");
const OPTIONS_SLOT: &str = "{{ timezone_options }}";

/// Render the form page; the first timezone is preselected.
pub(crate) fn render(timezones: &[String]) -> String {
    let mut options = String::new();
    for (i, tz) in timezones.iter().enumerate() {
        let tz = escape(tz);
        let selected = if i == 0 { " selected" } else { "" };
        let _ = writeln!(options, "<option value=\"{tz}\"{selected}>{tz}</option>");
    }
    TEMPLATE.replace(OPTIONS_SLOT, &options)
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_option_is_selected() {
        let html = render(&["UTC".to_string(), "Europe/Paris".to_string()]);

        assert!(html.contains("<option value=\"UTC\" selected>UTC</option>"));
        assert!(html.contains("<option value=\"Europe/Paris\">Europe/Paris</option>"));
        assert!(!html.contains(OPTIONS_SLOT));
    }

    #[test]
    fn values_are_escaped() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn template_has_submit_fields() {
        for field in ["input_dir", "filename_metadata", "n_workers", "tz_selection", "start_date"] {
            assert!(
                TEMPLATE.contains(&format!("name=\"{field}\"")),
                "template is missing {field}"
            );
        }
    }
}
