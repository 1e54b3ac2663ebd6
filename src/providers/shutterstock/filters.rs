//! Filter schema of the Shutterstock connector.

use crate::labels::LabelCatalog;
use crate::query::{COLLECTION_FIELD, QUERY_FIELD};
use crate::{FilterDefinition, FilterOption};

/// Every filter name, in the order the host renders them.
pub const FILTER_NAMES: [&str; 10] = [
    "category",
    "orientation",
    "color",
    "image_type",
    "people_number",
    "people_age",
    "people_gender",
    "people_ethnicity",
    "people_model_released",
    COLLECTION_FIELD,
];

/// Filters whose options come from the API.
pub(crate) const CATEGORY_FILTER: &str = "category";

/// Fixed options as (label key suffix, request value).
pub(crate) fn static_options(name: &str) -> &'static [(&'static str, &'static str)] {
    match name {
        "orientation" => &[("horizontal", "horizontal"), ("vertical", "vertical")],
        "color" => &[
            ("grayscale", "grayscale"),
            ("red", "FF0000"),
            ("orange", "FFA500"),
            ("yellow", "FFFF00"),
            ("green", "008000"),
            ("blue", "0000FF"),
            ("purple", "800080"),
            ("pink", "FFC0CB"),
            ("brown", "A52A2A"),
            ("black", "000000"),
            ("white", "FFFFFF"),
        ],
        "image_type" => &[
            ("photo", "photo"),
            ("illustration", "illustration"),
            ("vector", "vector"),
        ],
        "people_number" => &[("1", "1"), ("2", "2"), ("3", "3"), ("4", "4")],
        "people_age" => &[
            ("infants", "infants"),
            ("children", "children"),
            ("teenagers", "teenagers"),
            ("20s", "20s"),
            ("30s", "30s"),
            ("40s", "40s"),
            ("50s", "50s"),
            ("60s", "60s"),
            ("older", "older"),
        ],
        "people_gender" => &[("male", "male"), ("female", "female"), ("both", "both")],
        "people_ethnicity" => &[
            ("african", "african"),
            ("african_american", "african_american"),
            ("black", "black"),
            ("brazilian", "brazilian"),
            ("chinese", "chinese"),
            ("caucasian", "caucasian"),
            ("east_asian", "east_asian"),
            ("hispanic", "hispanic"),
            ("japanese", "japanese"),
            ("middle_eastern", "middle_eastern"),
            ("native_american", "native_american"),
            ("pacific_islander", "pacific_islander"),
            ("south_asian", "south_asian"),
            ("southeast_asian", "southeast_asian"),
            ("other", "other"),
        ],
        "people_model_released" => &[("true", "true"), ("false", "false")],
        _ => &[],
    }
}

/// Builds a filter with its localized label and fixed options.
pub(crate) fn static_filter(name: &str, labels: &dyn LabelCatalog) -> FilterDefinition {
    let options = static_options(name)
        .iter()
        .map(|(key, value)| FilterOption::new(labels.label(&format!("filter.{name}.{key}")), *value))
        .collect();
    FilterDefinition::new(name, labels.label(&format!("filter.{name}"))).with_options(options)
}

/// Filters the host must disable while a collection is browsed.
pub fn collection_disabled_filters() -> Vec<String> {
    FILTER_NAMES
        .iter()
        .filter(|name| **name != COLLECTION_FIELD)
        .chain(std::iter::once(&QUERY_FIELD))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::EnglishLabels;

    #[test]
    fn test_static_filter_orientation() {
        let filter = static_filter("orientation", &EnglishLabels);
        assert_eq!(filter.name, "orientation");
        assert_eq!(filter.label, "Orientation");
        assert_eq!(
            filter.options,
            vec![
                FilterOption::new("Horizontal", "horizontal"),
                FilterOption::new("Vertical", "vertical"),
            ]
        );
    }

    #[test]
    fn test_static_filter_color_uses_hex_values() {
        let filter = static_filter("color", &EnglishLabels);
        let red = filter.options.iter().find(|o| o.label == "Red").unwrap();
        assert_eq!(red.value, "FF0000");
        assert_eq!(filter.options[0].value, "grayscale");
    }

    #[test]
    fn test_every_static_option_has_english_label() {
        for name in FILTER_NAMES {
            assert!(EnglishLabels.lookup(&format!("filter.{name}")).is_some(), "{name}");
            for (key, _) in static_options(name) {
                let label_key = format!("filter.{name}.{key}");
                assert!(EnglishLabels.lookup(&label_key).is_some(), "{label_key}");
            }
        }
    }

    #[test]
    fn test_dynamic_filters_have_no_static_options() {
        assert!(static_options(CATEGORY_FILTER).is_empty());
        assert!(static_options(COLLECTION_FIELD).is_empty());
    }

    #[test]
    fn test_collection_disabled_filters() {
        let disabled = collection_disabled_filters();
        assert_eq!(disabled.len(), FILTER_NAMES.len());
        assert!(!disabled.iter().any(|f| f == COLLECTION_FIELD));
        assert!(disabled.iter().any(|f| f == QUERY_FIELD));
        assert_eq!(disabled.first().map(String::as_str), Some("category"));
        assert_eq!(disabled.last().map(String::as_str), Some(QUERY_FIELD));
    }
}
