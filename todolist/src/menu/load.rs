use crate::menu::tree::{build_tree, MenuNode};
use crate::menu_client::MenuError;
use crate::types::MenuRecord;

/// Anything that can return the active menu records in display order.
#[allow(async_fn_in_trait)]
pub trait MenuSource {
    async fn fetch_active(&self) -> Result<Vec<MenuRecord>, MenuError>;
}

/// What the menu component currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuLoad {
    Loading,
    Failed(String),
    Ready(Vec<MenuNode>),
}

impl MenuLoad {
    pub fn failed(err: &MenuError) -> Self {
        MenuLoad::Failed(err.display_message())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MenuLoad::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MenuLoad::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Root nodes, empty unless the fetch succeeded.
    pub fn tree(&self) -> &[MenuNode] {
        match self {
            MenuLoad::Ready(tree) => tree,
            _ => &[],
        }
    }
}

/// Fetch once and turn the outcome into display state.
///
/// Errors stop here; the tree is only built from a complete response.
pub async fn load_menu<S: MenuSource>(source: &S) -> MenuLoad {
    match source.fetch_active().await {
        Ok(records) => {
            let count = records.len();
            let tree = build_tree(records);
            tracing::info!("Loaded {} menu records ({} top-level)", count, tree.len());
            MenuLoad::Ready(tree)
        }
        Err(e) => {
            tracing::warn!("Menu fetch failed: {}", e);
            MenuLoad::failed(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(Result<Vec<MenuRecord>, String>);

    impl MenuSource for StaticSource {
        async fn fetch_active(&self) -> Result<Vec<MenuRecord>, MenuError> {
            self.0.clone().map_err(MenuError::ApiError)
        }
    }

    #[tokio::test]
    async fn test_success_builds_tree() {
        let source = StaticSource(Ok(vec![
            MenuRecord::new(1, "Today"),
            MenuRecord::new(2, "Errands").with_parent(1),
        ]));
        let load = load_menu(&source).await;
        assert_eq!(load.tree().len(), 1);
        assert_eq!(load.tree()[0].children[0].title(), "Errands");
        assert_eq!(load.error(), None);
    }

    #[tokio::test]
    async fn test_empty_response_is_ready_not_error() {
        let load = load_menu(&StaticSource(Ok(Vec::new()))).await;
        assert_eq!(load, MenuLoad::Ready(Vec::new()));
    }

    #[tokio::test]
    async fn test_failure_leaves_tree_empty() {
        let load = load_menu(&StaticSource(Err("permission denied for table menu_items".into()))).await;
        assert_eq!(load.error(), Some("permission denied for table menu_items"));
        assert!(load.tree().is_empty());
        assert!(!load.is_loading());
    }

    #[tokio::test]
    async fn test_failure_without_description() {
        let load = load_menu(&StaticSource(Err(String::new()))).await;
        assert_eq!(load.error(), Some(crate::menu_client::FALLBACK_ERROR));
    }

    #[test]
    fn test_loading_has_no_tree() {
        assert!(MenuLoad::Loading.is_loading());
        assert!(MenuLoad::Loading.tree().is_empty());
    }
}
