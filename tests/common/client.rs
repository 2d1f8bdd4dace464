#![allow(dead_code)]
use reqwest::Url;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn create_todo(&self, title: Option<&str>) -> reqwest::Response {
        let body = match title {
            Some(title) => serde_json::json!({ "title": title }),
            None => serde_json::json!({}),
        };
        self.client
            .post(self.url.join("todos").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .get(self.url.join("todos/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todos").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, todo_id: &str, title: &str) -> reqwest::Response {
        self.client
            .put(self.url.join("todos/").unwrap().join(todo_id).unwrap())
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo_without_title(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .put(self.url.join("todos/").unwrap().join(todo_id).unwrap())
            .json(&serde_json::json!({}))
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .delete(self.url.join("todos/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn health(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("health").unwrap())
            .send()
            .await
            .unwrap()
    }
}
