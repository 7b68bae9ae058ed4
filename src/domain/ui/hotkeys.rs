/// Keyboard event as delivered by the host window.
#[derive(Debug, Clone, Default)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphAction {
    ZoomIn,
    ZoomOut,
    FitView,
    Reset,
    Search,
}

/// Fixed graph-view bindings: `+`/`=`, `-`, `f`, `r`, and `ctrl/cmd+f`.
pub fn resolve_graph_hotkey(ev: &KeyEvent) -> Option<GraphAction> {
    let key = ev.key.to_ascii_lowercase();
    let modified = ev.ctrl || ev.meta;
    match (key.as_str(), modified) {
        ("f", true) => Some(GraphAction::Search),
        (_, true) => None,
        ("+" | "=", false) => Some(GraphAction::ZoomIn),
        ("-", false) => Some(GraphAction::ZoomOut),
        ("f", false) => Some(GraphAction::FitView),
        ("r", false) => Some(GraphAction::Reset),
        _ => None,
    }
}
