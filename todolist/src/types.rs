use serde::{Deserialize, Serialize};

/// One row of the `menu_items` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(rename = "oorder", alias = "order", default)]
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

fn default_active() -> bool {
    true
}

impl MenuRecord {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: None,
            parent_id: None,
            order: 0,
            is_active: true,
            kind: None,
            icon: None,
            target: None,
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// An empty url string counts as "no url", matching a falsy check on the row.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Primary,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_table_row() {
        let row = r#"{
            "id": 4,
            "title": "Inbox",
            "url": "/inbox",
            "parent_id": 1,
            "oorder": 3,
            "is_active": true,
            "type": "link",
            "icon": null,
            "target": "_blank"
        }"#;
        let record: MenuRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.parent_id, Some(1));
        assert_eq!(record.order, 3);
        assert_eq!(record.kind.as_deref(), Some("link"));
        assert_eq!(record.icon, None);
        assert_eq!(record.target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_record_minimal_row() {
        let record: MenuRecord =
            serde_json::from_str(r#"{"id": 1, "title": "Tasks", "order": 2}"#).unwrap();
        assert_eq!(record.order, 2);
        assert_eq!(record.parent_id, None);
        assert!(record.is_active);
        assert_eq!(record.link(), None);
    }

    #[test]
    fn test_empty_url_is_not_a_link() {
        let record = MenuRecord::new(1, "Group").with_url("");
        assert_eq!(record.link(), None);
    }
}
