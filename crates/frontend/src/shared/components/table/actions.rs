//! Row action vocabulary.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    /// Lowercased name reported to the caller.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    /// Name passed to `icons::icon`.
    pub fn icon_name(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "view" => Some(RowAction::View),
            "edit" => Some(RowAction::Edit),
            "delete" => Some(RowAction::Delete),
            _ => None,
        }
    }
}

/// Known actions in caller order. Unknown names render no control.
pub fn resolve_actions<S: AsRef<str>>(names: &[S]) -> Vec<RowAction> {
    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        match RowAction::from_name(name.as_ref()) {
            Some(action) if !resolved.contains(&action) => resolved.push(action),
            Some(_) => {}
            None => debug!("table: no icon for action '{}', skipped", name.as_ref()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_order_and_skips_unknown() {
        let resolved = resolve_actions(&["Delete", "archive", "view"]);
        assert_eq!(resolved, vec![RowAction::Delete, RowAction::View]);
    }

    #[test]
    fn test_resolve_drops_duplicates() {
        let resolved = resolve_actions(&["edit", "EDIT", "edit"]);
        assert_eq!(resolved, vec![RowAction::Edit]);
    }

    #[test]
    fn test_names_are_lowercased() {
        assert_eq!(RowAction::from_name("VIEW").map(|a| a.as_str()), Some("view"));
        assert_eq!(RowAction::from_name("print"), None);
    }

    #[test]
    fn test_empty_action_list() {
        let none: [&str; 0] = [];
        assert!(resolve_actions(&none).is_empty());
    }
}
