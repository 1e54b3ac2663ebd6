//! Filter schema shown by the host next to the search box.

use serde::{Serialize, Serializer};

/// One selectable value of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    /// Creates a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A filter with its label and option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDefinition {
    #[serde(skip)]
    pub name: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterDefinition {
    /// Creates a filter without options.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Sets the option list.
    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = options;
        self
    }
}

/// Ordered mapping from filter name to definition.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<FilterDefinition>,
}

impl FilterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, replacing an existing one with the same name.
    pub fn insert(&mut self, filter: FilterDefinition) {
        match self.filters.iter_mut().find(|f| f.name == filter.name) {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
    }

    /// Returns the filter with the given name.
    pub fn get(&self, name: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Returns the filter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.name.as_str())
    }

    /// Iterates over the filters in order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.filters.iter()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns whether the set has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.filters.iter().map(|f| (&f.name, f)))
    }
}
