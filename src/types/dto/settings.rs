use serde::{Deserialize, Serialize};

/// Editor widget used to render a setting value.
///
/// Storage is untouched by this type: every value persists as a string. An
/// unknown widget name degrades to plain text rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SettingType {
    Text,
    Image,
    Color,
    Font,
    Toggle,
}

impl SettingType {
    pub fn parse(value: &str) -> Self {
        match value {
            "image" => SettingType::Image,
            "color" => SettingType::Color,
            "font" => SettingType::Font,
            "toggle" => SettingType::Toggle,
            _ => SettingType::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingType::Text => "text",
            SettingType::Image => "image",
            SettingType::Color => "color",
            SettingType::Font => "font",
            SettingType::Toggle => "toggle",
        }
    }
}

impl From<String> for SettingType {
    fn from(value: String) -> Self {
        SettingType::parse(&value)
    }
}

impl std::fmt::Display for SettingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a bulk settings save.
///
/// Section and label travel with every entry so a brand-new key carries its
/// grouping explicitly instead of having it inferred from the key name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingUpsert {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default)]
    pub label: String,
}

fn default_kind() -> String {
    "text".to_string()
}

fn default_section() -> String {
    "global".to_string()
}

impl SettingUpsert {
    pub fn new(key: &str, value: &str, kind: SettingType, section: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            kind: kind.as_str().to_string(),
            section: section.to_string(),
            label: label.to_string(),
        }
    }

    /// Widget this entry renders with; lenient on unknown names.
    pub fn setting_type(&self) -> SettingType {
        SettingType::parse(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_widget_name_degrades_to_text() {
        assert_eq!(SettingType::parse("slider"), SettingType::Text);
        assert_eq!(SettingType::parse(""), SettingType::Text);
        assert_eq!(SettingType::parse("toggle"), SettingType::Toggle);
    }

    #[test]
    fn setting_upsert_defaults_match_schema_defaults() {
        let entry: SettingUpsert =
            serde_json::from_str(r#"{"key":"k","value":"v"}"#).expect("valid payload");
        assert_eq!(entry.kind, "text");
        assert_eq!(entry.section, "global");
        assert_eq!(entry.label, "");
    }
}
