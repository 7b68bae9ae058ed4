use std::sync::Arc;

use crate::application::graph::controls::GraphControls;
use crate::domain::ui::hotkeys::{GraphAction, KeyEvent, resolve_graph_hotkey};

type Handler = Arc<dyn Fn() + Send + Sync>;

/// Graph-view keyboard shortcuts. Every recognised combination suppresses the
/// default browser action, whether or not a handler is bound for it.
#[derive(Default, Clone)]
pub struct GraphHotkeys {
    pub zoom_in: Option<Handler>,
    pub zoom_out: Option<Handler>,
    pub fit_view: Option<Handler>,
    pub reset: Option<Handler>,
    pub search: Option<Handler>,
}

impl GraphHotkeys {
    /// Zoom/fit go to the controls; reset only when the host supplied one.
    pub fn for_controls(controls: Arc<GraphControls>, search: Option<Handler>) -> Self {
        let c1 = controls.clone();
        let c2 = controls.clone();
        let c3 = controls.clone();
        let reset: Option<Handler> = if controls.has_reset() {
            let c4 = controls.clone();
            Some(Arc::new(move || c4.reset()))
        } else {
            None
        };
        Self {
            zoom_in: Some(Arc::new(move || c1.zoom_in())),
            zoom_out: Some(Arc::new(move || c2.zoom_out())),
            fit_view: Some(Arc::new(move || c3.fit_view())),
            reset,
            search,
        }
    }

    pub fn handle(&self, ev: &mut KeyEvent) -> Option<GraphAction> {
        let action = resolve_graph_hotkey(ev)?;
        ev.prevent_default();
        let handler = match action {
            GraphAction::ZoomIn => &self.zoom_in,
            GraphAction::ZoomOut => &self.zoom_out,
            GraphAction::FitView => &self.fit_view,
            GraphAction::Reset => &self.reset,
            GraphAction::Search => &self.search,
        };
        if let Some(h) = handler {
            h();
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::graph::controls::test_support::RecordingViewport;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn prevents_default_even_without_handler() {
        let keys = GraphHotkeys::default();
        let mut ev = KeyEvent::new("r");
        assert_eq!(keys.handle(&mut ev), Some(GraphAction::Reset));
        assert!(ev.default_prevented());
    }

    #[test]
    fn unbound_key_leaves_event_alone() {
        let keys = GraphHotkeys::default();
        let mut ev = KeyEvent::new("q");
        assert_eq!(keys.handle(&mut ev), None);
        assert!(!ev.default_prevented());
    }

    #[test]
    fn routes_to_controls_and_search() {
        let vp = Arc::new(RecordingViewport::default());
        let controls = Arc::new(GraphControls::new(vp.clone(), None));
        let searches = Arc::new(AtomicUsize::new(0));
        let counter = searches.clone();
        let keys = GraphHotkeys::for_controls(
            controls,
            Some(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );

        for key in ["=", "+", "-", "f"] {
            keys.handle(&mut KeyEvent::new(key));
        }
        keys.handle(&mut KeyEvent::new("f").with_meta());
        keys.handle(&mut KeyEvent::new("r"));

        assert_eq!(
            *vp.calls.lock().unwrap(),
            vec!["zoom_in", "zoom_in", "zoom_out", "fit_view"]
        );
        assert_eq!(searches.load(Ordering::SeqCst), 1);
        assert!(keys.reset.is_none());
    }
}
