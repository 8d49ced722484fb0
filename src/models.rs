//! Frontend Models
//!
//! Data structures matching the remote project store's wire shapes.

use serde::{Deserialize, Serialize};

/// Signed-in user identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Project with its embedded, ordered task list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// One task row; `id` is assigned client-side and never reassigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
    #[serde(default)]
    pub note: String,
}

/// Body of a successful login/register response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub data: AuthData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthData {
    pub user: User,
}

impl Project {
    /// Completion is independent of task state: flipping it leaves the
    /// task sequence untouched.
    pub fn with_completed(&self, completed: bool) -> Project {
        Project {
            is_completed: completed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_wire_shape() {
        let json = r#"{"_id":"p1","name":"Site","isCompleted":false,"tasks":[{"id":"t1","title":"A","isDone":true,"note":"n"}]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.tasks.len(), 1);
        assert!(project.tasks[0].is_done);

        let back = serde_json::to_value(&project).unwrap();
        assert_eq!(back["_id"], "p1");
        assert_eq!(back["isCompleted"], false);
        assert_eq!(back["tasks"][0]["isDone"], true);
    }

    #[test]
    fn test_project_defaults() {
        // A freshly created project may come back without tasks
        let json = r#"{"_id":"p2","name":"Empty"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(!project.is_completed);
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn test_auth_response_shape() {
        let json = r#"{"token":"jwt","data":{"user":{"_id":"u1","name":"Ada","email":"ada@example.com"}}}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "jwt");
        assert_eq!(resp.data.user.name, "Ada");
    }

    #[test]
    fn test_with_completed_leaves_tasks_alone() {
        let project = Project {
            id: "p1".to_string(),
            name: "Site".to_string(),
            is_completed: false,
            tasks: vec![
                Task { id: "t1".to_string(), title: "A".to_string(), is_done: false, note: String::new() },
                Task { id: "t2".to_string(), title: "B".to_string(), is_done: true, note: "x".to_string() },
            ],
        };

        let toggled = project.with_completed(true);
        assert!(toggled.is_completed);
        assert_eq!(toggled.id, project.id);
        assert_eq!(toggled.name, project.name);
        assert_eq!(toggled.tasks, project.tasks);
    }
}
