pub mod login;
pub mod system;
pub mod user_menu;

use crate::services::UiState;
use leptos::prelude::*;
use masktronic::i18n::translate;

/// 随语言信号更新的翻译文本
pub fn tr(ui: UiState, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || ui.language.with(|lang| translate(lang, key))
}
