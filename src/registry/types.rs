use serde::Deserialize;

/// Top-level layout of the registry document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Registry {
    pub packages: Vec<RegistryPackage>,
}

/// One package entry, read verbatim from the registry and never mutated.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RegistryPackage {
    /// Unique hyphenated package identifier, e.g. `langchain-openai`.
    pub name: String,
    /// Owning repository in `org/repo` form.
    pub repo: String,
    /// Sibling JavaScript package reference, if one exists.
    pub js: Option<serde_yaml::Value>,
    /// Override slug for the provider page.
    pub provider_page: Option<String>,
    /// Monthly download count.
    pub downloads: Option<u64>,
    /// Display-title override.
    pub name_title: Option<String>,
}

impl RegistryPackage {
    /// True iff the entry declares a sibling JavaScript package.
    ///
    /// The `js` field has no fixed schema upstream; any truthy value counts.
    pub fn js_exists(&self) -> bool {
        match &self.js {
            None | Some(serde_yaml::Value::Null) => false,
            Some(serde_yaml::Value::Bool(b)) => *b,
            Some(serde_yaml::Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(serde_yaml::Value::String(s)) => !s.is_empty(),
            Some(serde_yaml::Value::Sequence(s)) => !s.is_empty(),
            Some(serde_yaml::Value::Mapping(m)) => !m.is_empty(),
            Some(serde_yaml::Value::Tagged(_)) => true,
        }
    }
}
