//! List presentation logic
//!
//! Pure transforms over the fetched product list: search, category
//! filter, and column sorting, plus the screen state machine the list
//! command drives. Everything here is synchronous and testable without a
//! server.

use crate::api::Product;

// ============================================================================
// Select options
// ============================================================================

/// A value/label pair for choice prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Category choices: "All" first, then the registered names in the order
/// the server returned them (alphabetical).
pub fn category_options(names: &[String]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "All")];
    options.extend(names.iter().map(|n| SelectOption::new(n.clone(), n.clone())));
    options
}

// ============================================================================
// Filtering
// ============================================================================

/// Category filter state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

/// Case-insensitive substring search over name and category, combined
/// with the category filter.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    filter: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Category,
    Quantity,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    /// Selecting the active column flips direction; selecting a different
    /// column resets to ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => {
                Some((column, SortDirection::Ascending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }
}

/// Sort a filtered view in place according to the sort state
pub fn sort_products(products: &mut [&Product], state: SortState) {
    let Some((column, direction)) = state.active else {
        return;
    };

    products.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortColumn::Quantity => a.quantity.cmp(&b.quantity),
            SortColumn::Price => a.price.cmp(&b.price),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

// ============================================================================
// Screen state machine
// ============================================================================

/// Lifecycle of the product list screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unauthenticated,
    Loading,
    Ready,
    Editing {
        product_id: i64,
    },
}

/// Product list screen state
#[derive(Debug, Default)]
pub struct ListScreen {
    pub phase: Phase,
    pub products: Vec<Product>,
    pub search: String,
    pub filter: CategoryFilter,
    pub sort: SortState,
}

impl ListScreen {
    pub fn authenticated() -> Self {
        Self {
            phase: Phase::Loading,
            ..Default::default()
        }
    }

    /// Fetched products arrived
    pub fn loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.phase = Phase::Ready;
    }

    pub fn begin_edit(&mut self, product_id: i64) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Editing { product_id };
        }
    }

    pub fn finish_edit(&mut self) {
        if matches!(self.phase, Phase::Editing { .. }) {
            self.phase = Phase::Ready;
        }
    }

    /// Local removal ahead of the reconciling refetch
    pub fn remove_locally(&mut self, product_id: i64) {
        self.products.retain(|p| p.id != product_id);
    }

    /// The credential was rejected; drop everything
    pub fn reset_to_unauthenticated(&mut self) {
        self.products.clear();
        self.phase = Phase::Unauthenticated;
    }

    /// Apply search, filter, and sort to the loaded products
    pub fn visible(&self) -> Vec<&Product> {
        let mut rows = filter_products(&self.products, &self.search, &self.filter);
        sort_products(&mut rows, self.sort);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i64, name: &str, category: &str, quantity: i64, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price: price.parse().unwrap(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(3, "USB Cable", "Electronics", 40, "4.99"),
            product(2, "Desk Lamp", "Furniture", 5, "29.99"),
            product(1, "Laptop", "Electronics", 3, "899.00"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_category() {
        let products = fixture();

        let by_name = filter_products(&products, "lamp", &CategoryFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Desk Lamp");

        let by_category = filter_products(&products, "ELECTRO", &CategoryFilter::All);
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let products = fixture();
        assert_eq!(filter_products(&products, "", &CategoryFilter::All).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let products = fixture();
        let filter = CategoryFilter::Named("Furniture".to_string());
        let rows = filter_products(&products, "", &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Desk Lamp");
    }

    #[test]
    fn test_sort_toggle_on_repeat_and_reset_on_switch() {
        let mut state = SortState::default();

        state.toggle(SortColumn::Name);
        assert_eq!(state.active, Some((SortColumn::Name, SortDirection::Ascending)));

        state.toggle(SortColumn::Name);
        assert_eq!(state.active, Some((SortColumn::Name, SortDirection::Descending)));

        // Switching columns resets to ascending
        state.toggle(SortColumn::Price);
        assert_eq!(state.active, Some((SortColumn::Price, SortDirection::Ascending)));
    }

    #[test]
    fn test_sort_by_price() {
        let products = fixture();
        let mut rows = filter_products(&products, "", &CategoryFilter::All);

        let mut state = SortState::default();
        state.toggle(SortColumn::Price);
        sort_products(&mut rows, state);

        let prices: Vec<String> = rows.iter().map(|p| p.price.to_string()).collect();
        assert_eq!(prices, vec!["4.99", "29.99", "899.00"]);
    }

    #[test]
    fn test_unsorted_view_keeps_server_order() {
        let products = fixture();
        let mut rows = filter_products(&products, "", &CategoryFilter::All);
        sort_products(&mut rows, SortState::default());

        let ids: Vec<i64> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_category_options_start_with_all() {
        let names = vec!["Electronics".to_string(), "Furniture".to_string()];
        let options = category_options(&names);
        assert_eq!(options[0], SelectOption::new("", "All"));
        assert_eq!(options[1].value, "Electronics");
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_screen_lifecycle() {
        let mut screen = ListScreen::authenticated();
        assert_eq!(screen.phase, Phase::Loading);

        screen.loaded(fixture());
        assert_eq!(screen.phase, Phase::Ready);
        assert_eq!(screen.visible().len(), 3);

        screen.begin_edit(2);
        assert_eq!(screen.phase, Phase::Editing { product_id: 2 });
        screen.finish_edit();
        assert_eq!(screen.phase, Phase::Ready);
    }

    #[test]
    fn test_local_delete_then_reset() {
        let mut screen = ListScreen::authenticated();
        screen.loaded(fixture());

        screen.remove_locally(2);
        assert_eq!(screen.visible().len(), 2);

        screen.reset_to_unauthenticated();
        assert_eq!(screen.phase, Phase::Unauthenticated);
        assert!(screen.products.is_empty());
    }

    #[test]
    fn test_delete_reconciles_with_refetch() {
        let mut screen = ListScreen::authenticated();
        screen.loaded(fixture());

        // The row disappears locally before the server confirms
        screen.remove_locally(2);
        assert!(screen.visible().iter().all(|p| p.id != 2));

        // The refetched list is authoritative
        let refetched: Vec<Product> = fixture().into_iter().filter(|p| p.id != 2).collect();
        screen.loaded(refetched);
        assert_eq!(screen.phase, Phase::Ready);
        assert_eq!(screen.visible().len(), 2);
    }

    #[test]
    fn test_price_sort_is_numeric_not_lexicographic() {
        let products = vec![
            product(1, "a", "x", 1, "10.00"),
            product(2, "b", "x", 1, "9.00"),
        ];
        let mut rows = filter_products(&products, "", &CategoryFilter::All);

        let mut state = SortState::default();
        state.toggle(SortColumn::Price);
        sort_products(&mut rows, state);

        assert_eq!(rows[0].price, dec!(9.00));
        assert_eq!(rows[1].price, dec!(10.00));
    }
}
