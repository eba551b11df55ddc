// crates/userpool-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for userpool-plan.
// Purpose: Keep every user-facing string in one catalog.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! User-facing strings live in a small per-locale catalog and are rendered
//! through the [`t!`](crate::t) macro. Missing keys fall back to English and
//! then to the key itself. Placeholders are `{name}` tokens substituted in
//! argument order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Parses a locale value, ignoring case and region tags (`ca_ES`, `en-GB`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next() {
            Some("en") => Some(Self::En),
            Some("ca") => Some(Self::Ca),
            _ => None,
        }
    }
}

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name without braces.
    pub key: &'static str,
    /// Preformatted substitution value.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`].
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Locale selected for this process.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "userpool-plan {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config {path} is valid."),
    ("config.invalid.header", "Configuration rejected with {count} violation(s):"),
    ("config.invalid.entry", "  - {path}: {rule} ({kind})"),
    ("config.schema.serialize_failed", "Failed to serialize config schema: {error}"),
    ("audit.open_failed", "Failed to open audit log {path}: {error}"),
    ("plan.digest_failed", "Failed to hash plan: {error}"),
    ("plan.serialize_failed", "Failed to serialize plan: {error}"),
    ("plan.markdown.title", "# User pool plan"),
    ("plan.markdown.source", "Source: `{path}`"),
    ("plan.markdown.digest", "Digest: `{digest}`"),
    ("plan.markdown.count", "{count} resource(s) planned."),
    (
        "plan.markdown.empty",
        "No resources planned: the pool is disabled or schema changes are ignored.",
    ),
    ("plan.markdown.header", "| # | Address | Kind |"),
];

/// Catalan catalog.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "userpool-plan {version}"),
    ("output.stream.stdout", "sortida estàndard"),
    ("output.stream.stderr", "sortida d'errors"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("config.validate.ok", "La configuració {path} és vàlida."),
    ("config.invalid.header", "Configuració rebutjada amb {count} infracció(ns):"),
    ("config.invalid.entry", "  - {path}: {rule} ({kind})"),
    (
        "config.schema.serialize_failed",
        "No s'ha pogut serialitzar l'esquema de configuració: {error}",
    ),
    ("audit.open_failed", "No s'ha pogut obrir el registre d'auditoria {path}: {error}"),
    ("plan.digest_failed", "No s'ha pogut calcular el resum del pla: {error}"),
    ("plan.serialize_failed", "No s'ha pogut serialitzar el pla: {error}"),
    ("plan.markdown.title", "# Pla del grup d'usuaris"),
    ("plan.markdown.source", "Origen: `{path}`"),
    ("plan.markdown.digest", "Resum: `{digest}`"),
    ("plan.markdown.count", "{count} recurs(os) planificat(s)."),
    (
        "plan.markdown.empty",
        "Cap recurs planificat: el grup està desactivat o s'ignoren els canvis d'esquema.",
    ),
    ("plan.markdown.header", "| # | Adreça | Tipus |"),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` in the current locale, substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(current_locale())
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// `$key` must match a catalog entry; named arguments fill `{placeholder}`
/// positions.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================
