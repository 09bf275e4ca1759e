//! Category API and the validated mutation service
//!
//! [`CategoryStore`] is the seam to the external store; [`HttpClient`]
//! implements it against the documented endpoints. [`CategoryService`] owns
//! the current tree snapshot and gates every mutation through the hierarchy
//! engine before anything touches the network. After a successful mutation
//! the whole tree is re-fetched and rebuilt; there is no incremental patch,
//! so the in-memory view never silently diverges from the store.

use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use shared::category::{CategoryForm, CategoryTree, would_create_circular_reference};
use shared::error::{AppError, ErrorCategory, ValidationErrors};
use shared::models::{
    Category, CategoryCreate, CategoryMove, CategoryUpdate, ReorderRequest, SiblingOrder,
};
use shared::response::ApiResponse;
use thiserror::Error;

/// External category store, consumed only through this interface
///
/// Calls are not retried or deduplicated here; the caller serializes
/// mutations (the UI allows one in-flight mutation at a time).
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fetch all category records (flat; hierarchy is rebuilt client-side)
    async fn fetch_all(&self) -> ClientResult<Vec<Category>>;

    /// Create a category
    async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category>;

    /// Partially update a category
    async fn update(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Category>;

    /// Reparent and/or reposition a category
    async fn move_category(&self, id: &str, payload: &CategoryMove) -> ClientResult<Category>;

    /// Batch sibling sort-order reassignment, applied atomically
    async fn reorder(&self, payload: &ReorderRequest) -> ClientResult<()>;

    /// Delete a category; cascade behavior is the store's decision
    async fn delete(&self, id: &str) -> ClientResult<bool>;

    /// Server-side free-text search over categories
    async fn search(&self, query: &str) -> ClientResult<Vec<Category>>;
}

/// Unwrap the store's response envelope, surfacing store-reported errors
fn into_data<T>(response: ApiResponse<T>) -> ClientResult<T> {
    response.into_data().map_err(app_error_to_client)
}

fn app_error_to_client(err: AppError) -> ClientError {
    match err.code.category() {
        ErrorCategory::General | ErrorCategory::Hierarchy => ClientError::Validation(err.message),
        ErrorCategory::Store => ClientError::Forbidden(err.message),
        ErrorCategory::System => ClientError::Internal(err.message),
    }
}

#[async_trait]
impl CategoryStore for HttpClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Category>> {
        into_data(
            self.get::<ApiResponse<Vec<Category>>>("/api/categories")
                .await?,
        )
    }

    async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        into_data(
            self.post::<ApiResponse<Category>, _>("/api/categories", payload)
                .await?,
        )
    }

    async fn update(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Category> {
        into_data(
            self.put::<ApiResponse<Category>, _>(&format!("/api/categories/{}", id), payload)
                .await?,
        )
    }

    async fn move_category(&self, id: &str, payload: &CategoryMove) -> ClientResult<Category> {
        into_data(
            self.put::<ApiResponse<Category>, _>(&format!("/api/categories/{}/move", id), payload)
                .await?,
        )
    }

    async fn reorder(&self, payload: &ReorderRequest) -> ClientResult<()> {
        into_data(
            self.put::<ApiResponse<()>, _>("/api/categories/sort-order", payload)
                .await?,
        )
    }

    async fn delete(&self, id: &str) -> ClientResult<bool> {
        into_data(
            self.delete::<ApiResponse<bool>>(&format!("/api/categories/{}", id))
                .await?,
        )
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<Category>> {
        into_data(
            self.get_with_query::<ApiResponse<Vec<Category>>>(
                "/api/categories/search",
                &[("q", query)],
            )
            .await?,
        )
    }
}

/// Service error taxonomy
///
/// Validation and hierarchy errors are resolved entirely client-side and
/// never reach the network; store errors are surfaced for banner display
/// with no automatic retry. No variant is fatal: the existing tree snapshot
/// stays intact and the caller may retry.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Field-level form failures (field -> message)
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Cycle-prevention violation, attributed to the parent field
    #[error("{0}")]
    Hierarchy(AppError),

    /// Error reported by the store or the transport
    #[error("{0}")]
    Store(#[from] ClientError),
}

impl ServiceError {
    /// Uniform message string for non-field-specific banner display
    pub fn banner_message(&self) -> String {
        self.to_string()
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Category service holding the current tree snapshot
///
/// Single-threaded over its snapshot: reads hand out the snapshot,
/// mutations validate against it, dispatch, then replace it wholesale from
/// a re-fetch. A failed call leaves the previous snapshot untouched.
pub struct CategoryService<S> {
    store: S,
    tree: CategoryTree,
}

impl<S: CategoryStore> CategoryService<S> {
    /// Create a service with an empty snapshot; call [`refresh`] to load
    ///
    /// [`refresh`]: CategoryService::refresh
    pub fn new(store: S) -> Self {
        Self {
            store,
            tree: CategoryTree::default(),
        }
    }

    /// Current tree snapshot
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-fetch all records from the store and rebuild the tree
    pub async fn refresh(&mut self) -> ServiceResult<&CategoryTree> {
        let records = self.store.fetch_all().await?;
        self.tree = CategoryTree::build(records);
        Ok(&self.tree)
    }

    /// Validate and create a category, then refresh
    pub async fn create(&mut self, form: CategoryForm) -> ServiceResult<&CategoryTree> {
        form.validate(&self.tree, None)
            .map_err(ServiceError::Validation)?;
        self.store.create(&form.into_create()).await?;
        self.refresh().await
    }

    /// Validate and update a category, then refresh
    pub async fn update(&mut self, id: &str, form: CategoryForm) -> ServiceResult<&CategoryTree> {
        form.validate(&self.tree, Some(id))
            .map_err(ServiceError::Validation)?;
        self.store.update(id, &form.into_update()).await?;
        self.refresh().await
    }

    /// Reparent and/or reposition a category, then refresh.
    ///
    /// The cycle check runs against the current snapshot before the request
    /// is sent; moving to root or to the current parent is always legal.
    pub async fn move_category(
        &mut self,
        id: &str,
        new_parent_id: Option<&str>,
        new_sort_order: Option<i32>,
    ) -> ServiceResult<&CategoryTree> {
        if let Some(parent) = new_parent_id {
            if parent == id {
                return Err(ServiceError::Hierarchy(AppError::self_parent(id)));
            }
            if !self.tree.contains(parent) {
                return Err(ServiceError::Hierarchy(AppError::parent_not_found(parent)));
            }
        }
        if would_create_circular_reference(&self.tree, id, new_parent_id) {
            return Err(ServiceError::Hierarchy(AppError::circular_reference(id)));
        }
        let payload = CategoryMove {
            new_parent_id: new_parent_id.map(str::to_string),
            new_sort_order,
        };
        self.store.move_category(id, &payload).await?;
        self.refresh().await
    }

    /// Batch-reassign sibling sort orders, then refresh
    pub async fn reorder(&mut self, sibling_orders: Vec<SiblingOrder>) -> ServiceResult<&CategoryTree> {
        let payload = ReorderRequest { sibling_orders };
        self.store.reorder(&payload).await?;
        self.refresh().await
    }

    /// Number of descendants a delete would affect.
    ///
    /// Surfaced to the caller before the delete is confirmed; the cascade
    /// decision itself belongs to the store.
    pub fn delete_impact(&self, id: &str) -> usize {
        self.tree.descendant_count(id)
    }

    /// Delete a category, then refresh
    pub async fn delete(&mut self, id: &str) -> ServiceResult<&CategoryTree> {
        self.store.delete(id).await?;
        self.refresh().await
    }

    /// Server-side search; builds a detached tree from the store's matches
    /// without replacing the current snapshot
    pub async fn search_remote(&self, query: &str) -> ServiceResult<CategoryTree> {
        let records = self.store.search(query).await?;
        Ok(CategoryTree::build(records))
    }
}
