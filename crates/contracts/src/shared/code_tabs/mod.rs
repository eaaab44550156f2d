//! Code tabs data model
//!
//! Содержит:
//! - `group` - группировка примеров кода по заголовку (вкладки)
//! - `selection` - состояние выбора (вкладка + язык)
//! - `slot` - разбор устаревшего формата `headingN` / `codeN`
//! - `config` - конфигурация виджета (serde)
//! - `theme` - светлая / тёмная тема
//! - `error` - ошибки валидации входных данных

pub mod config;
pub mod error;
pub mod group;
pub mod selection;
pub mod slot;
pub mod theme;

pub use config::{CodeRecord, CodeTabsConfig};
pub use error::CodeTabsError;
pub use group::{group_records, group_samples, group_slots, parse_languages, CodeGroup, CodeSample, CodeVariant};
pub use selection::SelectionState;
pub use slot::{Slot, SlotKey};
pub use theme::Theme;
