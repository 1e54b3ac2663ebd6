//! Localized labels for filters and buttons.
//!
//! The host owns translation storage; connectors only ask a [`LabelCatalog`]
//! for the text behind a key. Keys look like `filter.color` or
//! `filter.color.red`.

/// Source of localized label text.
pub trait LabelCatalog: Send + Sync {
    /// Returns the label for `key`, if the catalog knows it.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns the label for `key`, falling back to the key itself.
    fn label(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

/// Built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelCatalog for EnglishLabels {
    fn lookup(&self, key: &str) -> Option<String> {
        let text = match key {
            "button.add" => "Add stock image",

            "filter.category" => "Category",
            "filter.collection" => "Collection",
            "filter.orientation" => "Orientation",
            "filter.orientation.horizontal" => "Horizontal",
            "filter.orientation.vertical" => "Vertical",

            "filter.color" => "Color",
            "filter.color.grayscale" => "Grayscale",
            "filter.color.red" => "Red",
            "filter.color.orange" => "Orange",
            "filter.color.yellow" => "Yellow",
            "filter.color.green" => "Green",
            "filter.color.blue" => "Blue",
            "filter.color.purple" => "Purple",
            "filter.color.pink" => "Pink",
            "filter.color.brown" => "Brown",
            "filter.color.black" => "Black",
            "filter.color.white" => "White",

            "filter.image_type" => "Image type",
            "filter.image_type.photo" => "Photo",
            "filter.image_type.illustration" => "Illustration",
            "filter.image_type.vector" => "Vector",

            "filter.people_number" => "Number of people",
            "filter.people_number.1" => "1 person",
            "filter.people_number.2" => "2 people",
            "filter.people_number.3" => "3 people",
            "filter.people_number.4" => "4 or more people",

            "filter.people_age" => "Age",
            "filter.people_age.infants" => "Infants",
            "filter.people_age.children" => "Children",
            "filter.people_age.teenagers" => "Teenagers",
            "filter.people_age.20s" => "20s",
            "filter.people_age.30s" => "30s",
            "filter.people_age.40s" => "40s",
            "filter.people_age.50s" => "50s",
            "filter.people_age.60s" => "60s",
            "filter.people_age.older" => "Older",

            "filter.people_gender" => "Gender",
            "filter.people_gender.male" => "Male",
            "filter.people_gender.female" => "Female",
            "filter.people_gender.both" => "Both",

            "filter.people_ethnicity" => "Ethnicity",
            "filter.people_ethnicity.african" => "African",
            "filter.people_ethnicity.african_american" => "African American",
            "filter.people_ethnicity.black" => "Black",
            "filter.people_ethnicity.brazilian" => "Brazilian",
            "filter.people_ethnicity.chinese" => "Chinese",
            "filter.people_ethnicity.caucasian" => "Caucasian",
            "filter.people_ethnicity.east_asian" => "East Asian",
            "filter.people_ethnicity.hispanic" => "Hispanic",
            "filter.people_ethnicity.japanese" => "Japanese",
            "filter.people_ethnicity.middle_eastern" => "Middle Eastern",
            "filter.people_ethnicity.native_american" => "Native American",
            "filter.people_ethnicity.pacific_islander" => "Pacific Islander",
            "filter.people_ethnicity.south_asian" => "South Asian",
            "filter.people_ethnicity.southeast_asian" => "Southeast Asian",
            "filter.people_ethnicity.other" => "Other",

            "filter.people_model_released" => "Model released",
            "filter.people_model_released.true" => "Yes",
            "filter.people_model_released.false" => "No",

            _ => return None,
        };
        Some(text.to_string())
    }
}
