//! UI chrome state: notification queue, sidebar, current view.

/// How a notification renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Warning => "notification-warning",
            Severity::Error => "notification-error",
        }
    }
}

/// One entry in the notification queue.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// Shared chrome state outside any one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct UiSlice {
    pub notifications: Vec<Notification>,
    pub sidebar_open: bool,
    pub current_view: String,
    next_id: u64,
}

impl Default for UiSlice {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            sidebar_open: true,
            current_view: "dashboard".to_string(),
            next_id: 0,
        }
    }
}

impl UiSlice {
    /// Queue a notification and return its id for later dismissal.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_view(&mut self, view: impl Into<String>) {
        self.current_view = view.into();
    }

    /// "accounts" renders as "Accounts" in the header.
    pub fn view_title(&self) -> String {
        let mut chars = self.current_view.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => "Dashboard".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_assigns_unique_ids() {
        let mut ui = UiSlice::default();
        let a = ui.notify(Severity::Info, "first");
        let b = ui.notify(Severity::Error, "second");
        assert_ne!(a, b);
        assert_eq!(ui.notifications.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_matching() {
        let mut ui = UiSlice::default();
        let a = ui.notify(Severity::Info, "keep");
        let b = ui.notify(Severity::Error, "drop");
        ui.dismiss(b);
        assert_eq!(ui.notifications.len(), 1);
        assert_eq!(ui.notifications[0].id, a);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut ui = UiSlice::default();
        assert!(ui.sidebar_open);
        ui.toggle_sidebar();
        assert!(!ui.sidebar_open);
    }

    #[test]
    fn test_view_title_capitalizes() {
        let mut ui = UiSlice::default();
        ui.set_view("opportunities");
        assert_eq!(ui.view_title(), "Opportunities");
    }
}
