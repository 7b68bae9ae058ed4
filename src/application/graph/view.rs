use std::sync::Arc;

use crate::application::ports::ui_callbacks::NodeClickHandler;

/// Interaction side of the local graph surface for one focal note.
///
/// Layout and rendering belong to the graph engine; this only adapts the
/// engine's click event to the host callback.
pub struct LocalGraphView {
    node_id: String,
    on_node_click: Option<Arc<dyn NodeClickHandler>>,
}

impl LocalGraphView {
    pub fn new(node_id: impl Into<String>, on_node_click: Option<Arc<dyn NodeClickHandler>>) -> Self {
        Self {
            node_id: node_id.into(),
            on_node_click,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn set_node_id(&mut self, node_id: impl Into<String>) {
        self.node_id = node_id.into();
    }

    // The engine's event carries no node type, so hosts always get None.
    pub fn handle_engine_click(&self, clicked_node_id: &str) {
        if let Some(handler) = &self.on_node_click {
            handler.on_node_click(clicked_node_id, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn click_is_forwarded_without_type() {
        let seen: Arc<Mutex<Vec<(String, Option<String>)>>> = Arc::default();
        let sink = seen.clone();
        let handler: Arc<dyn NodeClickHandler> = Arc::new(move |id: &str, ty: Option<&str>| {
            sink.lock()
                .unwrap()
                .push((id.to_string(), ty.map(str::to_string)));
        });

        let view = LocalGraphView::new("focal", Some(handler));
        view.handle_engine_click("neighbour");
        assert_eq!(*seen.lock().unwrap(), vec![("neighbour".to_string(), None)]);
    }

    #[test]
    fn click_without_handler_is_noop() {
        let mut view = LocalGraphView::new("focal", None);
        view.handle_engine_click("neighbour");
        view.set_node_id("other");
        assert_eq!(view.node_id(), "other");
    }
}
