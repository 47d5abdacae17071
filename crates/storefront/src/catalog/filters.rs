//! In-memory product filtering.
//!
//! Filters run over the already-fetched product list; the endpoint is never
//! re-queried when filters change.

use rust_decimal::Decimal;

use super::Product;

/// Active catalog filters: category, price range, free-text search.
///
/// A default-constructed filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive minimum price.
    pub min_price: Option<Decimal>,
    /// Inclusive maximum price.
    pub max_price: Option<Decimal>,
    /// Case-insensitive substring search over name and description.
    pub search: Option<String>,
}

impl ProductFilters {
    /// Whether a single product passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category.as_deref() != Some(category.as_str())
        {
            return false;
        }

        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }

        if let Some(search) = &self.search {
            let term = search.to_lowercase();
            if !term.is_empty()
                && !product.name.to_lowercase().contains(&term)
                && !product.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }

    /// Apply all active filters, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pizzamama_core::ProductId;

    use super::*;

    fn product(id: i64, name: &str, price: Decimal, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("Pizza {name}"),
            price,
            image: None,
            category: Some(category.to_string()),
            ingredients: Vec::new(),
            popular: false,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Margherita", Decimal::new(850, 2), "classiche"),
            product(2, "Diavola", Decimal::new(900, 2), "piccanti"),
            product(3, "Quattro Formaggi", Decimal::new(1100, 2), "classiche"),
        ]
    }

    #[test]
    fn test_default_filters_match_everything() {
        let products = catalog();
        assert_eq!(ProductFilters::default().apply(&products).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let products = catalog();
        let filters = ProductFilters {
            category: Some("classiche".to_string()),
            ..ProductFilters::default()
        };

        let matched = filters.apply(&products);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|p| p.category.as_deref() == Some("classiche")));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = catalog();
        let filters = ProductFilters {
            min_price: Some(Decimal::new(900, 2)),
            max_price: Some(Decimal::new(1100, 2)),
            ..ProductFilters::default()
        };

        let matched = filters.apply(&products);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].name, "Diavola");
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let products = catalog();
        let filters = ProductFilters {
            search: Some("DIAVOLA".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(filters.apply(&products).len(), 1);

        let filters = ProductFilters {
            search: Some("pizza".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(filters.apply(&products).len(), 3);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let products = catalog();
        let filters = ProductFilters {
            search: Some(String::new()),
            ..ProductFilters::default()
        };
        assert_eq!(filters.apply(&products).len(), 3);
    }

    #[test]
    fn test_filters_compose() {
        let products = catalog();
        let filters = ProductFilters {
            category: Some("classiche".to_string()),
            max_price: Some(Decimal::new(1000, 2)),
            ..ProductFilters::default()
        };

        let matched = filters.apply(&products);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Margherita");
    }
}
