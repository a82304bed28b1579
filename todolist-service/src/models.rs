use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Fields a client may set on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskBase {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

pub type TaskCreate = TaskBase;
pub type TaskUpdate = TaskBase;

impl TaskBase {
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Task title must not be empty".to_string());
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(format!("Task title must be at most {} characters", TITLE_MAX_LEN));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(format!(
                    "Task description must be at most {} characters",
                    DESCRIPTION_MAX_LEN
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str) -> TaskBase {
        TaskBase {
            title: title.to_string(),
            description: None,
            completed: false,
        }
    }

    #[test]
    fn test_create_defaults() {
        let body: TaskCreate = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(body.description, None);
        assert!(!body.completed);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(task("   ").validate().is_err());
    }

    #[test]
    fn test_long_fields_rejected() {
        assert!(task(&"x".repeat(TITLE_MAX_LEN)).validate().is_ok());
        assert!(task(&"x".repeat(TITLE_MAX_LEN + 1)).validate().is_err());

        let mut long = task("Notes");
        long.description = Some("y".repeat(DESCRIPTION_MAX_LEN + 1));
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }
}
