use std::time::Duration;

/// How long a toast stays on screen unless dismissed first.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id, used to dismiss it later.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
        id
    }

    /// Removes the toast with `id`. Dismissing an unknown id is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push("one", "first");
        let b = queue.push("two", "second");
        assert!(b > a);
        let titles = queue.toasts().iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["one", "two"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::new();
        let a = queue.push("one", "");
        let b = queue.push("two", "");
        assert!(queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        // already gone, e.g. closed by hand before the timer fired
        assert!(!queue.dismiss(a));
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new();
        let a = queue.push("one", "");
        queue.dismiss(a);
        assert!(queue.is_empty());
        let b = queue.push("two", "");
        assert_ne!(a, b);
    }
}
