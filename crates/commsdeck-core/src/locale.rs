//! Localization seam consumed by the console model.

/// String lookup interface the model uses for display text.
///
/// `commsdeck-ui` implements this over fluent bundles; headless code and
/// tests can use [`RawLocale`].
pub trait Localize {
    /// Resolve `key` to a display string, falling back to the key itself.
    fn t(&self, key: &str) -> String;

    /// Resolve `key`, or `None` when no translation exists.
    fn try_t(&self, key: &str) -> Option<String>;

    /// Resolve `key` with named arguments substituted into the template.
    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String;
}

/// Pass-through locale: every key resolves to itself.
///
/// Keeps the model usable without a translation catalog; `t_args` appends
/// the arguments so templated output remains distinguishable in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawLocale;

impl Localize for RawLocale {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }

    fn try_t(&self, _key: &str) -> Option<String> {
        None
    }

    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = key.to_string();
        for (name, value) in args {
            out.push_str(&format!(" {name}={value}"));
        }
        out
    }
}
