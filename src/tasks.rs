//! Task List Operations
//!
//! Pure transforms over a project's task sequence. Every board mutation
//! goes through one of these and then commits the full resulting list,
//! so ids must survive each transform unchanged.

use uuid::Uuid;

use crate::models::Task;

/// Title given to freshly added tasks
pub const DEFAULT_TASK_TITLE: &str = "New Task - Edit Me!";

/// Create a task with a fresh client-side id
pub fn new_task() -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        title: DEFAULT_TASK_TITLE.to_string(),
        is_done: false,
        note: String::new(),
    }
}

/// Append a freshly created task at the end of the sequence
pub fn push_new(tasks: &[Task]) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(new_task());
    next
}

/// Move the task at `from` so it ends up at `to`
///
/// Indices outside the current bounds, or a move to the same slot, yield
/// `None` so the caller skips the commit. Ids are never regenerated here.
pub fn move_task(tasks: &[Task], from: usize, to: usize) -> Option<Vec<Task>> {
    if from >= tasks.len() || to >= tasks.len() || from == to {
        return None;
    }
    let mut next = tasks.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// Replace the task matching `updated.id`, keeping its position
/// An id not present in the sequence leaves it unchanged
pub fn replace_task(tasks: &[Task], updated: &Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| if t.id == updated.id { updated.clone() } else { t.clone() })
        .collect()
}

/// Remove the task with the given id, preserving the order of the rest
pub fn remove_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Normalize a submitted title edit; whitespace-only edits are rejected
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            is_done: false,
            note: String::new(),
        }
    }

    fn three() -> Vec<Task> {
        vec![task("1", "A"), task("2", "B"), task("3", "C")]
    }

    #[test]
    fn test_move_first_to_last() {
        let moved = move_task(&three(), 0, 2).unwrap();

        let ids: Vec<&str> = moved.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
        // Fields travel with their ids
        assert_eq!(moved[2].title, "A");
    }

    #[test]
    fn test_move_back_to_front() {
        let moved = move_task(&three(), 2, 0).unwrap();

        let ids: Vec<&str> = moved.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_move_preserves_ids_and_fields() {
        let mut tasks = three();
        tasks[1].is_done = true;
        tasks[1].note = "remember".to_string();

        let moved = move_task(&tasks, 1, 2).unwrap();

        assert_eq!(moved.len(), 3);
        let shuffled = moved.iter().find(|t| t.id == "2").unwrap();
        assert_eq!(shuffled.title, "B");
        assert!(shuffled.is_done);
        assert_eq!(shuffled.note, "remember");
    }

    #[test]
    fn test_move_out_of_bounds_is_no_op() {
        assert!(move_task(&three(), 3, 0).is_none());
        assert!(move_task(&three(), 0, 3).is_none());
        assert!(move_task(&[], 0, 0).is_none());
    }

    #[test]
    fn test_move_to_same_slot_is_no_op() {
        assert!(move_task(&three(), 1, 1).is_none());
    }

    #[test]
    fn test_push_appends_with_fresh_id() {
        let tasks = three();
        let next = push_new(&tasks);

        assert_eq!(next.len(), 4);
        let added = &next[3];
        assert!(tasks.iter().all(|t| t.id != added.id));
        assert_eq!(added.title, DEFAULT_TASK_TITLE);
        assert!(!added.is_done);
        assert_eq!(added.note, "");
    }

    #[test]
    fn test_push_on_empty_list() {
        let next = push_new(&[]);

        assert_eq!(next.len(), 1);
        assert!(!next[0].is_done);
        assert_eq!(next[0].note, "");
    }

    #[test]
    fn test_two_added_tasks_get_distinct_ids() {
        let once = push_new(&[]);
        let twice = push_new(&once);

        assert_ne!(twice[0].id, twice[1].id);
    }

    #[test]
    fn test_remove_is_exact() {
        let next = remove_task(&three(), "2");

        let ids: Vec<&str> = next.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_remove_unknown_id_is_no_op() {
        let next = remove_task(&three(), "nope");
        assert_eq!(next, three());
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut updated = task("2", "B revised");
        updated.is_done = true;

        let next = replace_task(&three(), &updated);

        assert_eq!(next.len(), 3);
        assert_eq!(next[1].id, "2");
        assert_eq!(next[1].title, "B revised");
        assert!(next[1].is_done);
        // Neighbors untouched
        assert_eq!(next[0], task("1", "A"));
        assert_eq!(next[2], task("3", "C"));
    }

    #[test]
    fn test_replace_unknown_id_is_no_op() {
        let stranger = task("99", "ghost");
        assert_eq!(replace_task(&three(), &stranger), three());
    }

    #[test]
    fn test_normalize_title_trims() {
        assert_eq!(normalize_title("  Ship it  "), Some("Ship it".to_string()));
    }

    #[test]
    fn test_normalize_title_rejects_blank() {
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title("\t\n"), None);
    }
}
