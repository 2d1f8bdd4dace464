use serde::Deserialize;
use validator::Validate;

use crate::validation::non_blank;

/// Body for `POST /todos`. `title` is optional at the serde level so a
/// missing field surfaces as a validation failure, not a decode reject.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CreateTodo {
    #[validate(
        required(message = "title is required"),
        custom(function = non_blank)
    )]
    pub title: Option<String>,
}

/// Body for `PUT /todos/:id`; same rule set as create.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct UpdateTodo {
    #[validate(
        required(message = "title is required"),
        custom(function = non_blank)
    )]
    pub title: Option<String>,
}
