//! Host-supplied capabilities for the graph and editor surfaces.
//!
//! Each consumer asks only for the callback it actually invokes. Plain
//! closures implement these traits, so hosts rarely need a dedicated type.

pub trait NodeClickHandler: Send + Sync {
    fn on_node_click(&self, node_id: &str, node_type: Option<&str>);
}

impl<F> NodeClickHandler for F
where
    F: Fn(&str, Option<&str>) + Send + Sync,
{
    fn on_node_click(&self, node_id: &str, node_type: Option<&str>) {
        self(node_id, node_type)
    }
}

pub trait LinkClickHandler {
    fn on_link_click(&self, note_id: &str);
}

impl<F> LinkClickHandler for F
where
    F: Fn(&str),
{
    fn on_link_click(&self, note_id: &str) {
        self(note_id)
    }
}

pub trait ResetHandler: Send + Sync {
    fn on_reset(&self);
}

impl<F> ResetHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_reset(&self) {
        self()
    }
}

/// Imperative viewport API of the graph rendering engine.
pub trait GraphViewport: Send + Sync {
    fn zoom_in(&self);
    fn zoom_out(&self);
    fn fit_view(&self);
}
