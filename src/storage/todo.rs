use bincode::{Decode, Encode};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::TodoId;

/// External JSON projection: `{_id, title, isActive, createdAt, updatedAt}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entity as handed to `save`; the storage layer assigns the id and the
/// timestamps on first persist.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
        }
    }

    pub(crate) fn into_todo(self, id: TodoId, now: DateTime<Utc>) -> Todo {
        Todo {
            id,
            title: self.title,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

fn apply_if_changed<T: PartialEq + Clone>(field: &mut T, new: &Option<T>) {
    if let Some(value) = new {
        if *field != *value {
            *field = value.clone();
        }
    }
}

impl Todo {
    pub(crate) fn apply(&mut self, changes: &TodoChanges, now: DateTime<Utc>) {
        apply_if_changed(&mut self.title, &changes.title);
        apply_if_changed(&mut self.is_active, &changes.is_active);
        self.updated_at = now;
    }
}

/// Typed rendition of the document-store query `{_id, isActive}`.
/// An unset field does not constrain the match.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoFilter {
    pub id: Option<TodoId>,
    pub is_active: Option<bool>,
}

impl TodoFilter {
    pub fn by_id(id: TodoId) -> Self {
        Self {
            id: Some(id),
            is_active: None,
        }
    }

    pub fn active(mut self) -> Self {
        self.is_active = Some(true);
        self
    }

    pub(crate) fn matches(&self, todo: &Todo) -> bool {
        if let Some(id) = self.id {
            if todo.id != id {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if todo.is_active != is_active {
                return false;
            }
        }
        true
    }
}

/// Typed rendition of the `$set` changes document.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

impl TodoChanges {
    pub fn set_title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }

    pub fn deactivate() -> Self {
        Self {
            is_active: Some(false),
            ..Self::default()
        }
    }
}

/// Persistent envelope; timestamps are stored as unix millis since
/// `DateTime` carries no bincode encoding.
#[derive(Encode, Decode, Debug)]
pub(crate) enum TodoVersion {
    V1 {
        id: TodoId,
        title: String,
        is_active: bool,
        created_at_ms: i64,
        updated_at_ms: i64,
    },
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// Current time truncated to millis, matching the persistent precision so
/// a saved entity compares equal to its decoded form.
pub(crate) fn now_millis() -> DateTime<Utc> {
    from_millis(Utc::now().timestamp_millis())
}

impl From<TodoVersion> for Todo {
    fn from(value: TodoVersion) -> Self {
        match value {
            TodoVersion::V1 {
                id,
                title,
                is_active,
                created_at_ms,
                updated_at_ms,
            } => Self {
                id,
                title,
                is_active,
                created_at: from_millis(created_at_ms),
                updated_at: from_millis(updated_at_ms),
            },
        }
    }
}

impl From<Todo> for TodoVersion {
    fn from(value: Todo) -> Self {
        Self::V1 {
            id: value.id,
            title: value.title,
            is_active: value.is_active,
            created_at_ms: value.created_at.timestamp_millis(),
            updated_at_ms: value.updated_at.timestamp_millis(),
        }
    }
}
