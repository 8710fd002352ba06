/// Compile-time description of one declared struct field.
///
/// Emitted by `#[derive(Convert)]` for every field, private ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Declared name, raw-identifier prefix stripped (`r#type` -> `type`).
    pub name: &'static str,
    /// `true` for `pub` fields only.
    pub visible: bool,
    /// `(label, value)` pairs from `#[tag(label = "value")]`, first value per label.
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldInfo {
    /// Value of the tag under `label`, if the field carries one.
    pub fn tag(&self, label: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| *value)
    }
}

/// Field table of a struct, in declaration order.
pub trait Fields {
    const FIELDS: &'static [FieldInfo];
}
