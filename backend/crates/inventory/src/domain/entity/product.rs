//! Product entity and validated draft

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use rust_decimal::Decimal;

use crate::error::{InventoryError, InventoryResult};

/// 商品エンティティ
///
/// `category` は登録時点の分類名をそのまま保持する文字列です。
/// カテゴリ台帳への外部キーは張りません。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Validated product payload, used for both create and overwrite-update.
///
/// All four fields must be present; `name` and `category` must be
/// non-blank. Zero is a valid quantity and a valid price, negatives are
/// not.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    category: String,
    quantity: i64,
    price: Decimal,
}

impl ProductDraft {
    pub fn new(
        name: Option<String>,
        category: Option<String>,
        quantity: Option<i64>,
        price: Option<Decimal>,
    ) -> InventoryResult<Self> {
        let (name, category, quantity, price) = match (name, category, quantity, price) {
            (Some(n), Some(c), Some(q), Some(p)) => (n, c, q, p),
            _ => return Err(InventoryError::MissingFields),
        };

        if name.trim().is_empty() || category.trim().is_empty() {
            return Err(InventoryError::MissingFields);
        }
        if quantity < 0 {
            return Err(InventoryError::NegativeQuantity);
        }
        if price < Decimal::ZERO {
            return Err(InventoryError::NegativePrice);
        }

        Ok(Self {
            name,
            category,
            quantity,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full(
        name: &str,
        category: &str,
        quantity: i64,
        price: Decimal,
    ) -> InventoryResult<ProductDraft> {
        ProductDraft::new(
            Some(name.to_string()),
            Some(category.to_string()),
            Some(quantity),
            Some(price),
        )
    }

    #[test]
    fn test_valid_draft() {
        let draft = full("Widget", "Hardware", 3, dec!(9.99)).unwrap();
        assert_eq!(draft.name(), "Widget");
        assert_eq!(draft.quantity(), 3);
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = ProductDraft::new(
            Some("Widget".to_string()),
            None,
            Some(1),
            Some(dec!(1.00)),
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::MissingFields));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = full("   ", "Hardware", 1, dec!(1.00)).unwrap_err();
        assert!(matches!(err, InventoryError::MissingFields));
    }

    #[test]
    fn test_zero_quantity_and_price_are_valid() {
        // 在庫ゼロ・価格ゼロは正当な状態
        let draft = full("Sample", "Freebies", 0, Decimal::ZERO).unwrap();
        assert_eq!(draft.quantity(), 0);
        assert_eq!(draft.price(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = full("Widget", "Hardware", -1, dec!(1.00)).unwrap_err();
        assert!(matches!(err, InventoryError::NegativeQuantity));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = full("Widget", "Hardware", 1, dec!(-0.01)).unwrap_err();
        assert!(matches!(err, InventoryError::NegativePrice));
    }
}
