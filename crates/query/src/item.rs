use serde::Serialize;

/// Icon shown next to every result.
pub const ICON: &str = "images/icon.png";

/// What happens when a result is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAction {
    /// Connection string handed back on selection.
    pub data: String,
    /// Whether the launcher window stays open afterwards.
    pub keep_app_open: bool,
}

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub icon: &'static str,
    pub name: String,
    pub description: String,
    pub on_enter: Option<ItemAction>,
}

impl ResultItem {
    /// A result that opens an SSH session to `target` with `connection`.
    pub fn connect(target: &str, connection: String) -> Self {
        Self {
            icon: ICON,
            name: target.to_string(),
            description: format!("Connect to '{target}' with SSH"),
            on_enter: Some(ItemAction {
                data: connection,
                keep_app_open: false,
            }),
        }
    }

    /// A result reporting a failure. Selecting it does nothing.
    pub fn error(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon: ICON,
            name: name.into(),
            description: description.into(),
            on_enter: None,
        }
    }

    /// The connection string carried by this result, if any.
    pub fn payload(&self) -> Option<&str> {
        self.on_enter.as_ref().map(|action| action.data.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_item() {
        let item = ResultItem::connect("b.com", "u@b.com".into());
        assert_eq!(item.name, "b.com");
        assert_eq!(item.description, "Connect to 'b.com' with SSH");
        assert_eq!(item.payload(), Some("u@b.com"));
        assert_eq!(item.icon, ICON);
    }

    #[test]
    fn test_error_item_has_no_action() {
        let item = ResultItem::error("Launch failed", "terminal not found");
        assert!(item.payload().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let item = ResultItem::connect("a", "u@a".into());
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["icon"], "images/icon.png");
        assert_eq!(value["on_enter"]["data"], "u@a");
        assert_eq!(value["on_enter"]["keep_app_open"], false);
    }
}
