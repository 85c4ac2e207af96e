/// Widget settings: where to mount, which form control to read, and the UI text.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub root_id: String,
    pub input_name: String,
    pub labels: Labels,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub title: String,
    pub subtitle: String,
    pub input_label: String,
    pub placeholder: String,
    pub add_button: String,
    pub delete_button: String,
    pub list_heading: String,
    pub empty_notice: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_id: "root".to_string(),
            input_name: "item".to_string(),
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Item list".to_string(),
            subtitle: "Add and remove items from a list".to_string(),
            input_label: "Item to add:".to_string(),
            placeholder: "Item".to_string(),
            add_button: "Add item to the list".to_string(),
            delete_button: "Remove item".to_string(),
            list_heading: "Items in the list".to_string(),
            empty_notice: "The list is empty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mount_on_root_and_read_item_input() {
        let config = Config::default();
        assert_eq!(config.root_id, "root");
        assert_eq!(config.input_name, "item");
        assert!(!config.labels.empty_notice.is_empty());
    }
}
