//! Unit tests for the inventory crate
//!
//! Use cases are exercised against an in-memory repository; nothing here
//! touches a real database.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::{CategoryId, ProductId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::{
    AddCategoryInput, AddCategoryUseCase, CreateProductInput, CreateProductUseCase,
    DeleteProductInput, DeleteProductUseCase, ListCategoriesUseCase, ListProductsUseCase,
    ResetInventoryUseCase, UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::domain::value_object::category_name::CategoryName;
use crate::error::{InventoryError, InventoryResult};

/// In-memory product and category store for use-case tests
#[derive(Clone, Default)]
struct MemoryInventoryRepository {
    products: Arc<Mutex<Vec<Product>>>,
    categories: Arc<Mutex<Vec<String>>>,
    next_product_id: Arc<Mutex<i64>>,
}

impl ProductRepository for MemoryInventoryRepository {
    async fn list(&self) -> InventoryResult<Vec<Product>> {
        let mut products = self.products.lock().unwrap().clone();
        products.sort_by(|a, b| b.id.as_i64().cmp(&a.id.as_i64()));
        Ok(products)
    }

    async fn insert(&self, draft: &ProductDraft) -> InventoryResult<ProductId> {
        let mut next = self.next_product_id.lock().unwrap();
        *next += 1;
        let id = ProductId::from_i64(*next);

        self.products.lock().unwrap().push(Product {
            id,
            name: draft.name().to_string(),
            category: draft.category().to_string(),
            quantity: draft.quantity(),
            price: draft.price(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> InventoryResult<bool> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.name = draft.name().to_string();
                product.category = draft.category().to_string();
                product.quantity = draft.quantity();
                product.price = draft.price();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> InventoryResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn delete_all(&self) -> InventoryResult<()> {
        self.products.lock().unwrap().clear();
        Ok(())
    }
}

impl CategoryRepository for MemoryInventoryRepository {
    async fn insert(&self, name: &CategoryName) -> InventoryResult<CategoryId> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c == name.as_str()) {
            return Err(InventoryError::CategoryExists);
        }
        categories.push(name.as_str().to_string());
        Ok(CategoryId::from_i64(categories.len() as i64))
    }

    async fn list_names(&self) -> InventoryResult<Vec<String>> {
        let mut names = self.categories.lock().unwrap().clone();
        names.sort();
        Ok(names)
    }
}

fn setup() -> Arc<MemoryInventoryRepository> {
    Arc::new(MemoryInventoryRepository::default())
}

fn input(name: &str, category: &str, quantity: i64, price: Decimal) -> CreateProductInput {
    CreateProductInput {
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        quantity: Some(quantity),
        price: Some(price),
    }
}

async fn create(repo: &Arc<MemoryInventoryRepository>, name: &str) -> ProductId {
    CreateProductUseCase::new(repo.clone())
        .execute(input(name, "General", 1, dec!(1.00)))
        .await
        .expect("create failed")
        .product_id
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn list_returns_newest_first() {
    let repo = setup();
    create(&repo, "first").await;
    create(&repo, "second").await;
    create(&repo, "third").await;

    let products = ListProductsUseCase::new(repo.clone()).execute().await.unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let repo = setup();

    let err = CreateProductUseCase::new(repo.clone())
        .execute(CreateProductInput {
            name: Some("Widget".to_string()),
            category: None,
            quantity: Some(1),
            price: Some(dec!(1.00)),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::MissingFields));
    assert_eq!(err.kind().status_code(), 400);
}

#[tokio::test]
async fn zero_quantity_and_price_are_accepted() {
    let repo = setup();

    let output = CreateProductUseCase::new(repo.clone())
        .execute(input("Sample", "Freebies", 0, Decimal::ZERO))
        .await
        .unwrap();

    assert_eq!(output.product_id.as_i64(), 1);
}

#[tokio::test]
async fn negative_values_are_rejected() {
    let repo = setup();

    let err = CreateProductUseCase::new(repo.clone())
        .execute(input("Widget", "Hardware", -5, dec!(1.00)))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NegativeQuantity));

    let err = CreateProductUseCase::new(repo.clone())
        .execute(input("Widget", "Hardware", 5, dec!(-1.00)))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NegativePrice));
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let repo = setup();
    let id = create(&repo, "old name").await;

    UpdateProductUseCase::new(repo.clone())
        .execute(UpdateProductInput {
            id,
            name: Some("new name".to_string()),
            category: Some("Updated".to_string()),
            quantity: Some(42),
            price: Some(dec!(99.99)),
        })
        .await
        .unwrap();

    let products = ListProductsUseCase::new(repo.clone()).execute().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "new name");
    assert_eq!(products[0].category, "Updated");
    assert_eq!(products[0].quantity, 42);
    assert_eq!(products[0].price, dec!(99.99));
}

#[tokio::test]
async fn update_unknown_product_is_not_found() {
    let repo = setup();

    let err = UpdateProductUseCase::new(repo.clone())
        .execute(UpdateProductInput {
            id: ProductId::from_i64(999),
            name: Some("ghost".to_string()),
            category: Some("None".to_string()),
            quantity: Some(1),
            price: Some(dec!(1.00)),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::ProductNotFound));
    assert_eq!(err.kind().status_code(), 404);
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let repo = setup();
    let first = create(&repo, "keep").await;
    let second = create(&repo, "remove").await;

    DeleteProductUseCase::new(repo.clone())
        .execute(DeleteProductInput { id: second })
        .await
        .unwrap();

    let products = ListProductsUseCase::new(repo.clone()).execute().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, first);

    let err = DeleteProductUseCase::new(repo.clone())
        .execute(DeleteProductInput { id: second })
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::ProductNotFound));
}

#[tokio::test]
async fn reset_clears_products_but_not_categories() {
    let repo = setup();
    create(&repo, "a").await;
    create(&repo, "b").await;
    AddCategoryUseCase::new(repo.clone())
        .execute(AddCategoryInput {
            name: Some("Hardware".to_string()),
        })
        .await
        .unwrap();

    ResetInventoryUseCase::new(repo.clone()).execute().await.unwrap();

    let products = ListProductsUseCase::new(repo.clone()).execute().await.unwrap();
    assert!(products.is_empty());

    let categories = ListCategoriesUseCase::new(repo.clone()).execute().await.unwrap();
    assert_eq!(categories, vec!["Hardware"]);
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn category_name_is_trimmed_on_add() {
    let repo = setup();

    let output = AddCategoryUseCase::new(repo.clone())
        .execute(AddCategoryInput {
            name: Some("  Electronics  ".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(output.name.as_str(), "Electronics");
}

#[tokio::test]
async fn blank_category_name_rejected() {
    let repo = setup();

    for name in [None, Some("".to_string()), Some("   ".to_string())] {
        let err = AddCategoryUseCase::new(repo.clone())
            .execute(AddCategoryInput { name })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::CategoryNameRequired));
    }
}

#[tokio::test]
async fn duplicate_category_rejected() {
    let repo = setup();
    let add = |name: &str| {
        let use_case = AddCategoryUseCase::new(repo.clone());
        let input = AddCategoryInput {
            name: Some(name.to_string()),
        };
        async move { use_case.execute(input).await }
    };

    add("Office").await.unwrap();
    let err = add("Office").await.unwrap_err();

    assert!(matches!(err, InventoryError::CategoryExists));
    assert_eq!(err.kind().status_code(), 400);
}

#[tokio::test]
async fn categories_list_alphabetically() {
    let repo = setup();
    for name in ["Zebra", "apple", "Mango"] {
        AddCategoryUseCase::new(repo.clone())
            .execute(AddCategoryInput {
                name: Some(name.to_string()),
            })
            .await
            .unwrap();
    }

    let names = ListCategoriesUseCase::new(repo.clone()).execute().await.unwrap();

    let mut expected = vec!["Zebra".to_string(), "apple".to_string(), "Mango".to_string()];
    expected.sort();
    assert_eq!(names, expected);
}
