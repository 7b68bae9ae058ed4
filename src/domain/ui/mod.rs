pub mod hotkeys;
pub mod toast;
