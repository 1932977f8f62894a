//! UI translations.

use leptos::prelude::*;
use lib_core::i18n::{Locale, Translator};

/// Browser language if supported, else `fallback`.
fn pick_locale(fallback: &str) -> Locale {
    gloo_utils::window()
        .navigator()
        .language()
        .and_then(|tag| Locale::parse(&tag))
        .unwrap_or_else(|| Locale::from_tag(fallback))
}

pub fn provide_translator(fallback: &str) -> Translator {
    let translator = Translator::new(pick_locale(fallback));
    log::debug!("ui locale: {}", translator.locale().tag());
    provide_context(translator);
    translator
}

pub fn use_translator() -> Translator {
    use_context::<Translator>().unwrap_or_default()
}
