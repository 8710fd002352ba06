use serde::Deserialize;

use crate::error::ConvertError;
use crate::field::FieldInfo;

/// Naming policy for record keys.
///
/// Lives for one call (or one `Converter`); nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConvertOptions {
    /// Tag label read for a field's external name (`#[tag(json = "...")]`).
    #[serde(default = "default_map_key_from_tag")]
    pub map_key_from_tag: String,
    /// Untagged fields use their declared name instead of being omitted.
    #[serde(default = "default_fall_back_to_field_name")]
    pub fall_back_to_field_name: bool,
}

fn default_map_key_from_tag() -> String {
    "json".into()
}
fn default_fall_back_to_field_name() -> bool {
    true
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            map_key_from_tag: default_map_key_from_tag(),
            fall_back_to_field_name: default_fall_back_to_field_name(),
        }
    }
}

impl ConvertOptions {
    pub fn new(map_key_from_tag: impl Into<String>, fall_back_to_field_name: bool) -> Self {
        Self {
            map_key_from_tag: map_key_from_tag.into(),
            fall_back_to_field_name,
        }
    }

    pub fn with_tag(mut self, label: impl Into<String>) -> Self {
        self.map_key_from_tag = label.into();
        self
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fall_back_to_field_name = enabled;
        self
    }

    /// Parse options from JSON. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConvertError> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// An empty label never matches a tag.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.map_key_from_tag.is_empty() {
            return Err(ConvertError::EmptyTagLabel);
        }
        Ok(())
    }

    /// Output key for `field`, or `None` when the field is left out.
    ///
    /// Non-`pub` fields are always left out. A non-empty tag under
    /// `map_key_from_tag` wins; otherwise the declared name is used when
    /// `fall_back_to_field_name` is set.
    pub fn field_key(&self, field: &FieldInfo) -> Option<String> {
        if !field.visible {
            return None;
        }
        match field.tag(&self.map_key_from_tag) {
            Some(name) if !name.is_empty() => Some(name.to_owned()),
            _ if self.fall_back_to_field_name => Some(field.name.to_owned()),
            _ => None,
        }
    }
}
