//! News Repository

use shared::models::{News, NewsCreate, NewsUpdate};
use shared::util::{now_millis, record_token};

use crate::collection::{Collection, DatedRecord, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "news";

impl Record for News {
    fn id(&self) -> &str {
        &self.id
    }
}

impl DatedRecord for News {
    type SortKey = i64;

    fn sort_key(&self) -> i64 {
        self.published_at
    }
}

#[derive(Clone)]
pub struct NewsRepository {
    coll: Collection<News>,
}

impl NewsRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            coll: Collection::new(store, COLLECTION),
        }
    }

    pub fn with_seed(store: RecordStore, seed: Vec<News>) -> Self {
        Self {
            coll: Collection::with_seed(store, COLLECTION, seed),
        }
    }

    /// Articles newest-first by publication time
    pub fn list(&self) -> StoreResult<Vec<News>> {
        self.coll.list()
    }

    /// Articles pinned to the home screen carousel
    pub fn list_featured(&self) -> StoreResult<Vec<News>> {
        Ok(self
            .coll
            .list()?
            .into_iter()
            .filter(|n| n.featured)
            .collect())
    }

    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<News>> {
        self.coll.get_by_id(id)
    }

    pub async fn create(&self, data: NewsCreate) -> StoreResult<News> {
        for (value, label) in [(&data.title, "title"), (&data.content, "content")] {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!("news {label} is required")));
            }
        }

        self.coll
            .insert(News {
                id: record_token(),
                title: data.title,
                content: data.content,
                image: data.image,
                category: data.category,
                author: data.author,
                published_at: now_millis(),
                views: 0,
                featured: data.featured.unwrap_or(false),
            })
            .await
    }

    pub async fn update(&self, id: &str, data: NewsUpdate) -> StoreResult<News> {
        for (value, label) in [(&data.title, "title"), (&data.content, "content")] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(StoreError::Validation(format!("news {label} is required")));
            }
        }

        self.coll
            .update_with(id, |news| {
                if let Some(title) = data.title {
                    news.title = title;
                }
                if let Some(content) = data.content {
                    news.content = content;
                }
                if let Some(image) = data.image {
                    news.image = image;
                }
                if let Some(category) = data.category {
                    news.category = category;
                }
                if let Some(author) = data.author {
                    news.author = author;
                }
                if let Some(featured) = data.featured {
                    news.featured = featured;
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.coll.remove(id).await?;
        Ok(())
    }

    /// Count one article read (detail screen open)
    pub async fn record_view(&self, id: &str) -> StoreResult<News> {
        self.coll
            .update_with(id, |news| {
                news.views = news.views.saturating_add(1);
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::NewsCategory;

    fn repository() -> NewsRepository {
        NewsRepository::new(RecordStore::open_in_memory().unwrap())
    }

    fn article(title: &str) -> NewsCreate {
        NewsCreate {
            title: title.to_string(),
            content: "Isi berita".to_string(),
            image: String::new(),
            category: NewsCategory::Berita,
            author: "Humas".to_string(),
            featured: None,
        }
    }

    #[tokio::test]
    async fn record_view_increments_counter() {
        let repo = repository();
        let created = repo.create(article("Pengumuman PKM")).await.unwrap();
        assert_eq!(created.views, 0);

        repo.record_view(&created.id).await.unwrap();
        let viewed = repo.record_view(&created.id).await.unwrap();
        assert_eq!(viewed.views, 2);
    }

    #[tokio::test]
    async fn featured_filter_only_returns_pinned_articles() {
        let repo = repository();
        repo.create(article("Biasa")).await.unwrap();
        let pinned = repo
            .create(NewsCreate {
                featured: Some(true),
                ..article("Utama")
            })
            .await
            .unwrap();

        let featured = repo.list_featured().unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, pinned.id);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let repo = repository();
        let err = repo.create(article("   ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
