//! Category lookups shared by the listing, browsing, and quiz services.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::Error;
use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

fn map_repository_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category store unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::service_unavailable(format!("category store failed: {message}"))
        }
    }
}

/// Resolves category identifiers to display labels. Side-effect free; every
/// call re-reads the category repository.
#[derive(Clone)]
pub struct CategoryIndex {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryIndex {
    /// Create an index over the given category repository.
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Every category in store order.
    pub async fn all(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .fetch_all()
            .await
            .map_err(map_repository_error)
    }

    /// Display label of one category, `NotFound` for unknown ids.
    pub async fn label_of(&self, id: CategoryId) -> Result<String, Error> {
        self.categories
            .fetch_by_id(id)
            .await
            .map_err(map_repository_error)?
            .map(|category| category.label)
            .ok_or_else(|| Error::not_found(format!("no category with id {id}")))
    }

    /// Whether a category with this id exists. The caller decides which
    /// error kind a missing category constitutes.
    pub async fn contains(&self, id: CategoryId) -> Result<bool, Error> {
        Ok(self
            .categories
            .fetch_by_id(id)
            .await
            .map_err(map_repository_error)?
            .is_some())
    }

    /// Id → label map embedded in the listing responses.
    pub async fn label_map(&self) -> Result<BTreeMap<CategoryId, String>, Error> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .map(|category| (category.id, category.label))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockCategoryRepository;
    use actix_rt::System;
    use rstest::rstest;

    fn index_with(repo: MockCategoryRepository) -> CategoryIndex {
        CategoryIndex::new(Arc::new(repo))
    }

    #[rstest]
    fn label_of_resolves_known_category() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_fetch_by_id()
            .returning(|id| Ok(Some(Category::new(id.value(), "Science"))));

        System::new().block_on(async move {
            let label = index_with(repo)
                .label_of(CategoryId::new(1))
                .await
                .expect("resolves");
            assert_eq!(label, "Science");
        });
    }

    #[rstest]
    fn label_of_unknown_category_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_fetch_by_id().returning(|_| Ok(None));

        System::new().block_on(async move {
            let err = index_with(repo)
                .label_of(CategoryId::new(99))
                .await
                .expect_err("unknown id");
            assert_eq!(err.code(), ErrorCode::NotFound);
        });
    }

    #[rstest]
    fn store_failures_surface_as_service_unavailable() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_fetch_all()
            .returning(|| Err(CategoryRepositoryError::connection("refused")));

        System::new().block_on(async move {
            let err = index_with(repo).all().await.expect_err("store down");
            assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        });
    }

    #[rstest]
    fn label_map_is_keyed_by_id() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_fetch_all().returning(|| {
            Ok(vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
            ])
        });

        System::new().block_on(async move {
            let map = index_with(repo).label_map().await.expect("maps");
            assert_eq!(map.get(&CategoryId::new(1)).map(String::as_str), Some("Science"));
            assert_eq!(map.get(&CategoryId::new(2)).map(String::as_str), Some("Art"));
        });
    }
}
