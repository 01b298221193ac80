use std::io::{self, Write};

use finder_core::AppViewModel;

/// Paints the view model to the terminal. The view model is the only source
/// of truth; this function never inspects state directly.
pub fn paint(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    writeln!(out)?;
    if let Some(label) = view.selected_label {
        writeln!(out, "== {label} ==")?;
    }
    if let Some(error) = &view.error {
        writeln!(out, "! {error}")?;
    }
    if let Some(placeholder) = view.placeholder {
        writeln!(out, "{placeholder}")?;
    }
    for (index, section) in view.sections.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, section.title)?;
        for line in &section.lines {
            if section.muted {
                writeln!(out, "   {line}")?;
            } else {
                writeln!(out, "   - {line}")?;
            }
        }
        if let Some(toggle) = section.toggle_label {
            if section.hidden_count > 0 {
                writeln!(
                    out,
                    "   … {} more — `toggle {}` to {}",
                    section.hidden_count,
                    index + 1,
                    toggle
                )?;
            } else {
                writeln!(out, "   `toggle {}` to {}", index + 1, toggle)?;
            }
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::{AppViewModel, SectionView};

    fn painted(view: &AppViewModel) -> String {
        let mut buffer = Vec::new();
        paint(&mut buffer, view).expect("paint");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn paints_placeholder_text() {
        let view = AppViewModel {
            placeholder: Some("Information will be shown here."),
            submit_enabled: true,
            ..AppViewModel::default()
        };
        assert!(painted(&view).contains("Information will be shown here."));
    }

    #[test]
    fn paints_error_banner() {
        let view = AppViewModel {
            error: Some("Please select at least one option.".to_string()),
            submit_enabled: true,
            ..AppViewModel::default()
        };
        assert!(painted(&view).contains("! Please select at least one option."));
    }

    #[test]
    fn paints_toggle_hint_for_truncated_sections() {
        let view = AppViewModel {
            selected_label: Some("Emails"),
            sections: vec![SectionView {
                title: "Journeys using this Email".to_string(),
                lines: vec!["Welcome journey".to_string()],
                muted: false,
                hidden_count: 2,
                toggle_label: Some("View more"),
            }],
            submit_enabled: true,
            ..AppViewModel::default()
        };
        let text = painted(&view);
        assert!(text.contains("== Emails =="));
        assert!(text.contains("1. Journeys using this Email"));
        assert!(text.contains("- Welcome journey"));
        assert!(text.contains("2 more — `toggle 1` to View more"));
    }
}
