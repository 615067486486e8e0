//! Widget Models
//!
//! Data structures for the persisted widget lists, plus the pure list
//! operations the components drive. Keeping the operations off the DOM
//! keeps them testable on the host.

use serde::{Deserialize, Serialize};

/// One todo entry. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

/// One saved link. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
}

impl LinkItem {
    /// Display label: the title, or the URL when the title is empty.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Trim and insert a new todo at the head. Returns false (and leaves the
/// list untouched) when the input is empty after trimming.
pub fn add_todo(todos: &mut Vec<TodoItem>, input: &str) -> bool {
    let text = input.trim();
    if text.is_empty() {
        return false;
    }
    todos.insert(
        0,
        TodoItem {
            text: text.to_string(),
            done: false,
        },
    );
    true
}

/// Flip the done flag at index `i`. Out-of-range indices are ignored.
pub fn toggle_todo(todos: &mut [TodoItem], i: usize) {
    if let Some(todo) = todos.get_mut(i) {
        todo.done = !todo.done;
    }
}

/// Drop every completed todo, keeping relative order of the rest.
pub fn clear_completed(todos: &mut Vec<TodoItem>) {
    todos.retain(|t| !t.done);
}

/// Count of todos still open.
pub fn remaining(todos: &[TodoItem]) -> usize {
    todos.iter().filter(|t| !t.done).count()
}

/// Ensure the URL carries an explicit scheme before it is stored.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Trim both fields and insert a new link at the head. An empty URL is a
/// no-op; an empty title is fine (the label falls back to the URL).
pub fn add_link(links: &mut Vec<LinkItem>, title: &str, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    links.insert(
        0,
        LinkItem {
            title: title.trim().to_string(),
            url: normalize_url(url),
        },
    );
    true
}

/// Remove index `i` from a list. Out-of-range indices are ignored.
pub fn remove_at<T>(list: &mut Vec<T>, i: usize) {
    if i < list.len() {
        list.remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(text: &str, done: bool) -> TodoItem {
        TodoItem {
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn test_add_todo_trims_and_prepends() {
        let mut todos = vec![todo("old", false)];
        assert!(add_todo(&mut todos, " Buy milk "));
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0], todo("Buy milk", false));
        assert_eq!(todos[1].text, "old");
    }

    #[test]
    fn test_add_todo_whitespace_only_is_noop() {
        let mut todos = vec![todo("old", false)];
        assert!(!add_todo(&mut todos, "  "));
        assert_eq!(todos, vec![todo("old", false)]);
    }

    #[test]
    fn test_toggle_and_remaining() {
        let mut todos = vec![todo("a", false), todo("b", true), todo("c", false)];
        assert_eq!(remaining(&todos), 2);
        toggle_todo(&mut todos, 0);
        assert_eq!(remaining(&todos), 1);
        toggle_todo(&mut todos, 0);
        assert_eq!(remaining(&todos), 2);
        // Out of range is a no-op
        toggle_todo(&mut todos, 99);
        assert_eq!(remaining(&todos), 2);
    }

    #[test]
    fn test_clear_completed() {
        let mut todos = vec![todo("a", true), todo("b", false), todo("c", true)];
        clear_completed(&mut todos);
        assert_eq!(todos, vec![todo("b", false)]);
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
    }

    #[test]
    fn test_add_link_normalizes_and_labels() {
        let mut links = Vec::new();
        assert!(add_link(&mut links, "", " foo.com "));
        assert_eq!(links[0].url, "https://foo.com");
        assert_eq!(links[0].label(), "https://foo.com");

        assert!(add_link(&mut links, " Docs ", "docs.rs"));
        assert_eq!(links[0].title, "Docs");
        assert_eq!(links[0].label(), "Docs");
    }

    #[test]
    fn test_add_link_empty_url_is_noop() {
        let mut links = vec![LinkItem {
            title: String::new(),
            url: "https://a.com".to_string(),
        }];
        assert!(!add_link(&mut links, "title", "   "));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_remove_at_keeps_order() {
        let mut list = vec![1, 2, 3, 4];
        remove_at(&mut list, 1);
        assert_eq!(list, vec![1, 3, 4]);
        remove_at(&mut list, 10);
        assert_eq!(list, vec![1, 3, 4]);
    }
}
