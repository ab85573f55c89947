//! Repository traits for inventory persistence

use kernel::id::ProductId;

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::value_object::category_name::CategoryName;
use crate::error::InventoryResult;

/// 商品リポジトリ
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// 新着順（id 降順）で全商品を取得
    async fn list(&self) -> InventoryResult<Vec<Product>>;

    /// 商品を登録し、採番された id を返す
    async fn insert(&self, draft: &ProductDraft) -> InventoryResult<ProductId>;

    /// 商品を全フィールド上書きで更新。対象が無ければ `false`
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> InventoryResult<bool>;

    /// 商品を削除。対象が無ければ `false`
    async fn delete(&self, id: ProductId) -> InventoryResult<bool>;

    /// 全商品を削除（在庫リセット）
    async fn delete_all(&self) -> InventoryResult<()>;
}

/// カテゴリリポジトリ
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// カテゴリを登録し、採番された id を返す。
    /// 名前が重複していれば `InventoryError::CategoryExists`
    async fn insert(&self, name: &CategoryName) -> InventoryResult<kernel::id::CategoryId>;

    /// カテゴリ名をアルファベット順で取得
    async fn list_names(&self) -> InventoryResult<Vec<String>>;
}
