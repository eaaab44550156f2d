pub mod clipboard;
pub mod code_tabs;
pub mod icons;
pub mod theme;
