pub mod code_tabs;
