pub mod controls;
pub mod hotkeys;
pub mod navigation;
pub mod view;
