//! Code tabs widget
//!
//! Содержит:
//! - `widget` - компонент CodeTabs (корневой)
//! - `tab_bar` - вкладки + индикатор выбранной вкладки
//! - `indicator` - геометрия индикатора и ожидание загрузки шрифтов
//! - `language_picker` - выбор языка внутри вкладки
//! - `code_panel` - панели с кодом и скрытым полем для копирования
//! - `copy_button` - кнопка копирования
//! - `ids` - идентификаторы элементов для ARIA

pub mod code_panel;
pub mod copy_button;
pub mod ids;
pub mod indicator;
pub mod language_picker;
pub mod tab_bar;
pub mod widget;

pub use widget::CodeTabs;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support;
