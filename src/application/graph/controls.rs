use std::sync::Arc;

use crate::application::ports::ui_callbacks::{GraphViewport, ResetHandler};

/// Zoom, fit and reset actions bound to the graph engine's viewport.
pub struct GraphControls {
    viewport: Arc<dyn GraphViewport>,
    on_reset: Option<Arc<dyn ResetHandler>>,
}

impl GraphControls {
    pub fn new(viewport: Arc<dyn GraphViewport>, on_reset: Option<Arc<dyn ResetHandler>>) -> Self {
        Self { viewport, on_reset }
    }

    pub fn zoom_in(&self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&self) {
        self.viewport.zoom_out();
    }

    pub fn fit_view(&self) {
        self.viewport.fit_view();
    }

    pub fn reset(&self) {
        if let Some(h) = &self.on_reset {
            h.on_reset();
        }
    }

    pub fn has_reset(&self) -> bool {
        self.on_reset.is_some()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingViewport {
        pub calls: Mutex<Vec<&'static str>>,
    }

    impl GraphViewport for RecordingViewport {
        fn zoom_in(&self) {
            self.calls.lock().unwrap().push("zoom_in");
        }
        fn zoom_out(&self) {
            self.calls.lock().unwrap().push("zoom_out");
        }
        fn fit_view(&self) {
            self.calls.lock().unwrap().push("fit_view");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingViewport;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn viewport_actions_pass_through() {
        let vp = Arc::new(RecordingViewport::default());
        let controls = GraphControls::new(vp.clone(), None);
        controls.zoom_in();
        controls.zoom_out();
        controls.fit_view();
        controls.reset();
        assert_eq!(*vp.calls.lock().unwrap(), vec!["zoom_in", "zoom_out", "fit_view"]);
    }

    #[test]
    fn reset_forwards_to_host() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = resets.clone();
        let on_reset: Arc<dyn ResetHandler> = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let controls = GraphControls::new(Arc::new(RecordingViewport::default()), Some(on_reset));
        controls.reset();
        assert!(controls.has_reset());
        assert_eq!(resets.load(Ordering::SeqCst), 1);
    }
}
