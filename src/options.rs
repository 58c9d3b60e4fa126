use std::collections::BTreeMap;

/// A single configuration value. Unknown keys keep whatever value the caller
/// supplied; recognized keys are read back through the typed getters.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

/// Immutable algorithm configuration, built once at construction by merging
/// caller overrides over the algorithm's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Merges `self` over `defaults`, key by key. Keys present in `self` win;
    /// keys only the defaults know keep their default value.
    pub fn merged_over(mut self, defaults: Options) -> Options {
        let mut merged = defaults;
        merged.values.append(&mut self.values);
        merged
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(OptionValue::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(OptionValue::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn float(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(OptionValue::Float(v)) => *v,
            _ => default,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_defaults_fill() {
        let defaults = Options::new().set("early_termination", true).set("animation_delay", 0i64);
        let merged = Options::new()
            .set("early_termination", false)
            .set("custom_key", "kept")
            .merged_over(defaults);

        assert!(!merged.flag("early_termination", true));
        assert_eq!(merged.int("animation_delay", 99), 0);
        assert_eq!(merged.get("custom_key"), Some(&OptionValue::Text("kept".to_string())));
    }

    #[test]
    fn typed_getters_fall_back_on_mismatch() {
        let options = Options::new().set("early_termination", "yes");
        assert!(options.flag("early_termination", true));
        assert_eq!(options.int("missing", 7), 7);
    }
}
