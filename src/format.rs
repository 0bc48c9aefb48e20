use crate::label::{LabelData, LabelPart};

pub const PROJECT_PLACEHOLDER: &str = "[Project Name]";
pub const PART_PLACEHOLDER: &str = "N/A";

/// Formatted rendering of one label snapshot. `copy_text` is the exact
/// clipboard payload; the display strings substitute placeholders for empty
/// values and are never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLabel {
    pub project_display: String,
    pub from_display: String,
    pub to_display: String,
    pub copy_text: String,
}

/// Joins the non-empty field names with `/` in cabinet/device/port/sub-port
/// order. Blank fields simply do not appear; no stray separators.
pub fn format_part(part: &LabelPart) -> String {
    part.fields()
        .map(|info| info.name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn format_label(label: &LabelData) -> FormattedLabel {
    let from = format_part(&label.from);
    let to = format_part(&label.to);
    let copy_text = format!("Project: {}\nFm: {}\nTo: {}", label.project, from, to);

    FormattedLabel {
        project_display: or_placeholder(&label.project, PROJECT_PLACEHOLDER),
        from_display: or_placeholder(&from, PART_PLACEHOLDER),
        to_display: or_placeholder(&to, PART_PLACEHOLDER),
        copy_text,
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{FieldSlot, LabelInfo};

    fn part_with_names(names: [&str; 4]) -> LabelPart {
        let mut part = LabelPart::empty();
        for (slot, name) in FieldSlot::ALL.iter().zip(names) {
            part = part.with_field(*slot, LabelInfo::empty().with_name(name));
        }
        part
    }

    #[test]
    fn format_part_skips_empty_fields_without_stray_separators() {
        let part = part_with_names(["US 1", "", "P7", ""]);
        assert_eq!(format_part(&part), "US 1/P7");
    }

    #[test]
    fn format_part_of_empty_part_is_empty() {
        assert_eq!(format_part(&LabelPart::empty()), "");
    }

    #[test]
    fn copy_text_is_exact() {
        let mut label = LabelData::empty();
        label.project = "Central City Expansion".to_string();
        label.from = part_with_names(["US 1", "Switch", "P7", ""]);
        label.to = part_with_names(["US 2", "Switch", "P3", ""]);

        let formatted = format_label(&label);
        assert_eq!(
            formatted.copy_text,
            "Project: Central City Expansion\nFm: US 1/Switch/P7\nTo: US 2/Switch/P3"
        );
    }

    #[test]
    fn display_uses_placeholders_but_copy_text_stays_raw() {
        let formatted = format_label(&LabelData::empty());
        assert_eq!(formatted.project_display, PROJECT_PLACEHOLDER);
        assert_eq!(formatted.from_display, PART_PLACEHOLDER);
        assert_eq!(formatted.to_display, PART_PLACEHOLDER);
        assert_eq!(formatted.copy_text, "Project: \nFm: \nTo: ");
    }

    #[test]
    fn populated_label_skips_placeholders() {
        let mut label = LabelData::empty();
        label.project = "Lab A".to_string();
        label.from = part_with_names(["US1", "", "", ""]);
        label.to = part_with_names(["US2", "SwitchB", "", ""]);

        let formatted = format_label(&label);
        assert_eq!(formatted.project_display, "Lab A");
        assert_eq!(formatted.from_display, "US1");
        assert_eq!(formatted.to_display, "US2/SwitchB");
        assert_eq!(
            formatted.copy_text,
            "Project: Lab A\nFm: US1\nTo: US2/SwitchB"
        );
    }
}
