use std::collections::{BTreeMap, HashMap};

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::{Pagination, Task, TaskBase, TaskCreate, TaskUpdate, Token};

#[derive(Debug, Clone)]
struct User {
    id: i64,
    email: String,
    password_hash: String,
}

/// In-process users, sessions and tasks.
#[derive(Debug, Default)]
pub struct TodoStore {
    users: Vec<User>,
    tokens: HashMap<String, i64>,
    tasks: BTreeMap<i64, Task>,
    next_user_id: i64,
    next_task_id: i64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<Token, StoreError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(StoreError::Invalid("Email and password are required".to_string()));
        }
        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail(email));
        }

        self.next_user_id += 1;
        let id = self.next_user_id;
        self.users.push(User {
            id,
            email,
            password_hash: hash_password(password),
        });

        Ok(self.issue_token(id))
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Token, StoreError> {
        let email = normalize_email(email);
        let digest = hash_password(password);
        let user_id = self
            .users
            .iter()
            .find(|u| u.email == email && u.password_hash == digest)
            .map(|u| u.id)
            .ok_or(StoreError::InvalidCredentials)?;

        Ok(self.issue_token(user_id))
    }

    pub fn user_for_token(&self, token: &str) -> Option<i64> {
        self.tokens.get(token).copied()
    }

    pub fn create_task(&mut self, user_id: i64, task: TaskCreate) -> Result<Task, StoreError> {
        task.validate().map_err(StoreError::Invalid)?;

        self.next_task_id += 1;
        let created = build_task(self.next_task_id, user_id, task);
        self.tasks.insert(created.id, created.clone());
        Ok(created)
    }

    /// The user's tasks in creation order.
    pub fn list_tasks(&self, user_id: i64, page: Pagination) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .skip(page.skip)
            .take(page.limit)
            .cloned()
            .collect()
    }

    pub fn get_task(&self, user_id: i64, task_id: i64) -> Result<Task, StoreError> {
        self.tasks
            .get(&task_id)
            .filter(|t| t.user_id == user_id)
            .cloned()
            .ok_or(StoreError::TaskNotFound(task_id))
    }

    pub fn update_task(&mut self, user_id: i64, task_id: i64, data: TaskUpdate) -> Result<Task, StoreError> {
        let slot = self
            .tasks
            .get_mut(&task_id)
            .filter(|t| t.user_id == user_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        data.validate().map_err(StoreError::Invalid)?;

        *slot = build_task(task_id, user_id, data);
        Ok(slot.clone())
    }

    pub fn delete_task(&mut self, user_id: i64, task_id: i64) -> Result<(), StoreError> {
        self.get_task(user_id, task_id)?;
        self.tasks.remove(&task_id);
        Ok(())
    }

    fn issue_token(&mut self, user_id: i64) -> Token {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), user_id);
        Token::bearer(token)
    }
}

fn build_task(id: i64, user_id: i64, data: TaskBase) -> Task {
    Task {
        id,
        title: data.title.trim().to_string(),
        description: data.description,
        completed: data.completed,
        user_id,
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Task not found")]
    TaskNotFound(i64),
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Invalid(String),
}
