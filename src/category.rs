//! A named group of image → spoken text mappings

use crate::error::BoardError;
use crate::store::KeyValueStore;

/// One page of the board
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: String,
    items: KeyValueStore<String, String>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: KeyValueStore::new(),
        }
    }

    /// Map `image_loc` to `text`, replacing any earlier text for that image.
    ///
    /// The empty location is reserved and silently ignored.
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        let key = Some(image_loc).filter(|loc| !loc.is_empty()).map(str::to_owned);
        if self.items.set(key, text.to_owned()).is_err() {
            log::debug!("ignoring item with empty image location in {:?}", self.name);
        }
    }

    /// Image locations in slot order
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Text spoken for `image_loc`
    pub fn select(&self, image_loc: &str) -> Result<&str, BoardError> {
        self.items
            .get(image_loc)
            .map(String::as_str)
            .map_err(|_| BoardError::ItemNotFound(image_loc.to_owned()))
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Swap-delete one item; returns its text if it was present
    pub fn remove_item(&mut self, image_loc: &str) -> Option<String> {
        self.items.remove(image_loc)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing store, in slot order
    pub fn items(&self) -> &KeyValueStore<String, String> {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Category {
        let mut category = Category::new("food");
        category.add_item("img/food/fries.png", "french fries");
        category.add_item("img/food/watermelon.png", "watermelon");
        category
    }

    #[test]
    fn test_new_category_is_empty() {
        let category = Category::new("clothing");
        assert_eq!(category.name(), "clothing");
        assert!(category.is_empty());
        assert!(category.image_locs().is_empty());
    }

    #[test]
    fn test_select_known_item() {
        let category = food();
        assert_eq!(category.select("img/food/fries.png"), Ok("french fries"));
        assert!(category.has_image("img/food/watermelon.png"));
        assert_eq!(category.len(), 2);
    }

    #[test]
    fn test_select_unknown_item() {
        let category = food();
        assert_eq!(
            category.select("img/food/pizza.png"),
            Err(BoardError::ItemNotFound("img/food/pizza.png".to_string()))
        );
        assert!(!category.has_image("img/food/pizza.png"));
    }

    #[test]
    fn test_image_locs_in_insertion_order() {
        let category = food();
        assert_eq!(
            category.image_locs(),
            vec!["img/food/fries.png", "img/food/watermelon.png"]
        );
    }

    #[test]
    fn test_add_item_overwrites_text() {
        let mut category = food();
        category.add_item("img/food/fries.png", "chips");
        assert_eq!(category.select("img/food/fries.png"), Ok("chips"));
        assert_eq!(category.len(), 2);
        assert_eq!(category.image_locs()[0], "img/food/fries.png");
    }

    #[test]
    fn test_empty_location_ignored() {
        let mut category = food();
        category.add_item("", "nothing");
        assert_eq!(category.len(), 2);
        assert!(!category.has_image(""));
    }

    #[test]
    fn test_remove_item_perturbs_order() {
        let mut category = food();
        category.add_item("img/food/apple.png", "apple");
        assert_eq!(category.remove_item("img/food/fries.png").as_deref(), Some("french fries"));
        assert_eq!(
            category.image_locs(),
            vec!["img/food/apple.png", "img/food/watermelon.png"]
        );
        assert_eq!(category.remove_item("img/food/fries.png"), None);
    }
}
