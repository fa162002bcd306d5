use serde_json::{Map, Value};

/// Ordered field name to value mapping for one form.
///
/// Field order is insertion order and is kept in relay payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    fields: Vec<(String, String)>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with every name present and empty.
    pub fn with_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names
                .into_iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    /// Insert or overwrite `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`FormDraft::set`].
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Value of `name`, empty when absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Empty every value, keeping the field names.
    pub fn clear(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.trim().is_empty())
    }

    /// Trimmed values as a JSON object, in field order.
    pub fn to_json(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(n, v)| (n.clone(), Value::String(v.trim().to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let mut draft = FormDraft::with_fields(["name", "email"]);
        draft.set("email", "a@b.co");
        draft.set("name", "Ada");
        draft.set("email", "ada@b.co");
        let order: Vec<_> = draft.iter().collect();
        assert_eq!(order, vec![("name", "Ada"), ("email", "ada@b.co")]);
    }

    #[test]
    fn clear_keeps_names() {
        let mut draft = FormDraft::new().field("name", "Ada");
        draft.clear();
        assert!(draft.is_blank());
        assert_eq!(draft.iter().count(), 1);
        assert_eq!(draft.get("missing"), "");
    }
}
