//! # Translations
//!
//! String tables for the menu and the swap page. Lookups of unknown keys
//! return the key itself, so a missing entry shows up as `spot-desc` on
//! screen instead of failing.
//!
//! ```rust
//! use lib_core::i18n::{Locale, Translator};
//!
//! let t = Translator::new(Locale::Es);
//! assert_eq!(t.t("trade"), "Operar");
//! assert_eq!(t.t("no-such-key"), "no-such-key");
//! ```

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Supported locale for a BCP 47 tag such as `es-AR`.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Like [`Locale::parse`], with English for unsupported tags.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, "trade") => "Trade",
        (Locale::En, "swap") => "Swap",
        (Locale::En, "favorites") => "Favorites",
        (Locale::En, "spot") => "Spot",
        (Locale::En, "spot-desc") => "Spot margin trading",
        (Locale::En, "perp") => "Perp",
        (Locale::En, "perp-desc") => "Perpetual futures trading",
        (Locale::En, "connect") => "Connect",
        (Locale::En, "disconnect") => "Disconnect",
        (Locale::En, "connecting") => "Connecting...",
        (Locale::En, "wallet-balances") => "Wallet balances",
        (Locale::En, "no-balances") => "No token balances",
        (Locale::En, "max-leverage") => "Max leverage",
        (Locale::En, "unknown-market") => "Unknown market",
        (Locale::En, "not-installed") => "Not installed",
        (Locale::En, "add-favorite") => "Add to favorites",
        (Locale::En, "remove-favorite") => "Remove from favorites",

        (Locale::Es, "trade") => "Operar",
        (Locale::Es, "swap") => "Intercambiar",
        (Locale::Es, "favorites") => "Favoritos",
        (Locale::Es, "spot") => "Spot",
        (Locale::Es, "spot-desc") => "Operaciones spot con margen",
        (Locale::Es, "perp") => "Perp",
        (Locale::Es, "perp-desc") => "Futuros perpetuos",
        (Locale::Es, "connect") => "Conectar",
        (Locale::Es, "disconnect") => "Desconectar",
        (Locale::Es, "connecting") => "Conectando...",
        (Locale::Es, "wallet-balances") => "Saldos de la billetera",
        (Locale::Es, "no-balances") => "Sin saldos de tokens",
        (Locale::Es, "max-leverage") => "Apalancamiento máximo",
        (Locale::Es, "unknown-market") => "Mercado desconocido",
        (Locale::Es, "not-installed") => "No instalada",
        (Locale::Es, "add-favorite") => "Añadir a favoritos",
        (Locale::Es, "remove-favorite") => "Quitar de favoritos",

        _ => return None,
    };
    Some(text)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translated text for `key`, or `key` itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::En, key))
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("es-AR"), Locale::Es);
        assert_eq!(Locale::from_tag("ES"), Locale::Es);
        assert_eq!(Locale::from_tag("en_US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::parse("fr-FR"), None);
        assert_eq!(Locale::parse("en-GB"), Some(Locale::En));
    }

    #[test]
    fn test_category_labels() {
        let t = Translator::new(Locale::En);
        assert_eq!(t.t("favorites"), "Favorites");
        assert_eq!(t.t("perp-desc"), "Perpetual futures trading");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let t = Translator::default();
        assert_eq!(t.t(""), "");
        assert_eq!(t.t("swap-desc"), "swap-desc");
    }
}
