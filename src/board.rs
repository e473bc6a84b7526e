//! Two-level AAC board
//!
//! The home page lists category launchers. Selecting a launcher opens its
//! category; selecting an item inside a category yields the text to speak.
//! The cursor stays in a category until [`Board::reset`] is called.
//!
//! The home category is stored under [`HOME_KEY`] in the category store and
//! is also held directly. Both paths share one `Rc`, so edits made through
//! either are visible through the other.

use std::cell::{Ref, RefCell};
use std::path::Path;
use std::rc::Rc;

use crate::category::Category;
use crate::consts::HOME_KEY;
use crate::error::BoardError;
use crate::persistence;
use crate::store::KeyValueStore;

type CategoryRef = Rc<RefCell<Category>>;

/// Category store plus a cursor into it
#[derive(Debug)]
pub struct Board {
    categories: KeyValueStore<String, CategoryRef>,
    home: CategoryRef,
    current: CategoryRef,
}

impl Board {
    /// Create a board holding only the empty home category
    pub fn new() -> Self {
        let home = Rc::new(RefCell::new(Category::new(HOME_KEY)));
        let categories = std::iter::once((HOME_KEY.to_owned(), Rc::clone(&home))).collect();
        Self {
            categories,
            current: Rc::clone(&home),
            home,
        }
    }

    /// Build a board from a board file.
    ///
    /// Missing or malformed files are logged; whatever parsed before the
    /// failure is kept and the board is always usable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let mut board = Self::new();
        board.merge_file(path);
        board
    }

    /// Read categories from `path` into this board and return how many
    /// categories the board holds afterwards. The cursor ends up at home.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        match persistence::read_file(self, path) {
            Ok(count) => log::info!("Loaded {} categories from {}", count, path.display()),
            Err(err) => log::warn!("Board file {} not fully loaded: {}", path.display(), err),
        }
        self.reset();
        self.category_count()
    }

    /// Write the board to `path`. Failures are logged and otherwise ignored.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match persistence::write_file(self, path) {
            Ok(()) => log::info!(
                "Board saved to {} ({} categories)",
                path.display(),
                self.category_count()
            ),
            Err(err) => log::warn!("Could not save board to {}: {}", path.display(), err),
        }
    }

    /// Whether the cursor is on the home page
    pub fn is_home(&self) -> bool {
        Rc::ptr_eq(&self.current, &self.home)
    }

    /// Act on a tapped image.
    ///
    /// At home this opens the category registered under `image_loc` and
    /// returns an empty string. Inside a category it returns the text to
    /// speak and leaves the cursor where it is.
    pub fn select(&mut self, image_loc: &str) -> Result<String, BoardError> {
        if self.is_home() {
            let next = self
                .categories
                .get(image_loc)
                .map_err(|_| BoardError::ItemNotFound(image_loc.to_owned()))?;
            self.current = Rc::clone(next);
            log::debug!("entered category {:?}", self.current.borrow().name());
            return Ok(String::new());
        }

        let current = self.current.borrow();
        if !current.has_image(image_loc) {
            return Err(BoardError::ItemNotFound(image_loc.to_owned()));
        }
        current.select(image_loc).map(str::to_owned)
    }

    /// Images on the current page
    pub fn image_locs(&self) -> Vec<String> {
        self.current.borrow().image_locs()
    }

    /// Go back to the home page
    pub fn reset(&mut self) {
        self.current = Rc::clone(&self.home);
    }

    /// Add an item to the current page.
    ///
    /// At home the item is a launcher, so a new empty category named `text`
    /// is registered under `image_loc` as well, replacing any category
    /// already there. Inside a category only the item is added. An empty
    /// `image_loc` is ignored.
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        if image_loc.is_empty() {
            log::debug!("ignoring item with empty image location");
            return;
        }
        self.current.borrow_mut().add_item(image_loc, text);
        if self.is_home() {
            let category = Rc::new(RefCell::new(Category::new(text)));
            if let Err(err) = self.categories.set(image_loc.to_owned(), category) {
                log::warn!("could not register category {:?}: {}", image_loc, err);
            }
        }
    }

    /// Register `category` under `image_loc` and put its launcher on the
    /// home page, whatever page the cursor is on. A category already under
    /// that key is replaced; if it was open, the cursor returns home.
    pub fn insert_category(&mut self, image_loc: &str, category: Category) {
        if image_loc.is_empty() {
            log::debug!("ignoring category with empty image location");
            return;
        }
        self.home.borrow_mut().add_item(image_loc, category.name());
        let replaced_current = self
            .categories
            .get(image_loc)
            .is_ok_and(|existing| Rc::ptr_eq(existing, &self.current));
        if let Err(err) = self
            .categories
            .set(image_loc.to_owned(), Rc::new(RefCell::new(category)))
        {
            log::warn!("could not register category {:?}: {}", image_loc, err);
        }
        if replaced_current {
            self.reset();
        }
    }

    /// Name of the open category, or `""` at home
    pub fn category(&self) -> String {
        if self.is_home() {
            String::new()
        } else {
            self.current.borrow().name().to_owned()
        }
    }

    /// Whether `image_loc` is an item anywhere on the board, launchers included
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.categories
            .values()
            .any(|category| category.borrow().has_image(image_loc))
    }

    /// Drop the category under `image_loc` along with its home launcher.
    ///
    /// Removal is a swap-delete, so it can reorder the remaining categories.
    /// The home key is refused. The cursor returns home if it was inside the
    /// removed category.
    pub fn remove_category(&mut self, image_loc: &str) -> bool {
        if image_loc == HOME_KEY {
            return false;
        }
        let Some(removed) = self.categories.remove(image_loc) else {
            return false;
        };
        self.home.borrow_mut().remove_item(image_loc);
        if Rc::ptr_eq(&removed, &self.current) {
            self.reset();
        }
        log::debug!("removed category {:?}", removed.borrow().name());
        true
    }

    /// Remove `image_loc` from the current page. At home this removes the
    /// whole category behind the launcher.
    pub fn remove_item(&mut self, image_loc: &str) -> bool {
        if self.is_home() {
            return self.remove_category(image_loc);
        }
        self.current.borrow_mut().remove_item(image_loc).is_some()
    }

    /// The home category
    pub fn home(&self) -> Ref<'_, Category> {
        self.home.borrow()
    }

    /// Non-home categories with their keys, in store slot order
    pub fn categories(&self) -> impl Iterator<Item = (&str, Ref<'_, Category>)> {
        let home = &self.home;
        self.categories
            .iter()
            .filter(move |&(_, category)| !Rc::ptr_eq(category, home))
            .map(|(key, category)| (key.as_str(), category.borrow()))
    }

    /// Number of categories, not counting home
    pub fn category_count(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATE: &str = "img/food/plate.png";
    const FRIES: &str = "img/food/fries.png";
    const HANGER: &str = "img/clothing/hanger.png";
    const SHIRT: &str = "img/clothing/collaredshirt.png";

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.add_item(PLATE, "food");
        board.add_item(HANGER, "clothing");
        board.select(PLATE).unwrap();
        board.add_item(FRIES, "french fries");
        board.reset();
        board.select(HANGER).unwrap();
        board.add_item(SHIRT, "collared shirt");
        board.reset();
        board
    }

    #[test]
    fn test_new_board_is_home_and_empty() {
        let board = Board::new();
        assert!(board.is_home());
        assert_eq!(board.category(), "");
        assert!(board.image_locs().is_empty());
        assert_eq!(board.category_count(), 0);
    }

    #[test]
    fn test_select_speak_reset_scenario() {
        let mut board = sample_board();
        assert_eq!(board.select(PLATE), Ok(String::new()));
        assert_eq!(board.category(), "food");
        assert_eq!(board.select(FRIES), Ok("french fries".to_string()));
        // Speaking does not leave the category
        assert_eq!(board.category(), "food");
        board.reset();
        assert_eq!(board.category(), "");
        assert!(board.is_home());
    }

    #[test]
    fn test_add_item_at_home_creates_category() {
        let mut board = Board::new();
        board.add_item("img/toys/ball.png", "toys");
        assert_eq!(board.image_locs(), vec!["img/toys/ball.png"]);
        assert_eq!(board.select("img/toys/ball.png"), Ok(String::new()));
        assert_eq!(board.category(), "toys");
        assert!(board.image_locs().is_empty());
    }

    #[test]
    fn test_add_item_in_category_does_not_register() {
        let mut board = sample_board();
        board.select(PLATE).unwrap();
        board.add_item("img/food/apple.png", "apple");
        board.reset();
        assert_eq!(board.category_count(), 2);
        assert!(board.select("img/food/apple.png").is_err());
    }

    #[test]
    fn test_unknown_launcher_keeps_home() {
        let mut board = sample_board();
        assert_eq!(
            board.select("img/nope.png"),
            Err(BoardError::ItemNotFound("img/nope.png".to_string()))
        );
        assert!(board.is_home());
    }

    #[test]
    fn test_unknown_item_keeps_category() {
        let mut board = sample_board();
        board.select(HANGER).unwrap();
        assert!(board.select(FRIES).is_err());
        assert_eq!(board.category(), "clothing");
    }

    #[test]
    fn test_home_paths_alias() {
        let mut board = Board::new();
        board.add_item(PLATE, "food");
        let via_store = board.categories.get(HOME_KEY).unwrap();
        assert!(Rc::ptr_eq(via_store, &board.home));
        assert!(via_store.borrow().has_image(PLATE));
        assert_eq!(board.home().len(), 1);
    }

    #[test]
    fn test_empty_location_ignored_at_home() {
        let mut board = Board::new();
        board.add_item("", "broken");
        assert!(board.home().is_empty());
        let via_store = board.categories.get(HOME_KEY).unwrap();
        assert!(Rc::ptr_eq(via_store, &board.home));
    }

    #[test]
    fn test_has_image_searches_every_category() {
        let board = sample_board();
        assert!(board.has_image(FRIES));
        assert!(board.has_image(SHIRT));
        // Launchers live in the home category
        assert!(board.has_image(PLATE));
        assert!(!board.has_image("img/nope.png"));
    }

    #[test]
    fn test_categories_skip_home() {
        let board = sample_board();
        let keys: Vec<String> = board.categories().map(|(key, _)| key.to_owned()).collect();
        assert_eq!(keys, vec![PLATE, HANGER]);
        assert_eq!(board.category_count(), 2);
    }

    #[test]
    fn test_remove_open_category_resets_cursor() {
        let mut board = sample_board();
        board.select(PLATE).unwrap();
        assert!(board.remove_category(PLATE));
        assert!(board.is_home());
        assert!(!board.home().has_image(PLATE));
        assert!(board.select(PLATE).is_err());
        assert_eq!(board.category_count(), 1);
    }

    #[test]
    fn test_remove_home_refused() {
        let mut board = sample_board();
        assert!(!board.remove_category(HOME_KEY));
        assert_eq!(board.category_count(), 2);
    }

    #[test]
    fn test_remove_item_in_category() {
        let mut board = sample_board();
        board.select(HANGER).unwrap();
        assert!(board.remove_item(SHIRT));
        assert!(!board.remove_item(SHIRT));
        assert!(board.image_locs().is_empty());
        assert_eq!(board.category(), "clothing");
    }

    #[test]
    fn test_insert_category_replacing_open_one() {
        let mut board = sample_board();
        board.select(PLATE).unwrap();
        let mut snacks = Category::new("snacks");
        snacks.add_item("img/food/chips.png", "chips");
        board.insert_category(PLATE, snacks);
        assert!(board.is_home());
        assert_eq!(board.home().select(PLATE), Ok("snacks"));
        board.select(PLATE).unwrap();
        assert_eq!(board.image_locs(), vec!["img/food/chips.png"]);
    }
}
