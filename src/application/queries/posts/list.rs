use std::collections::HashMap;

use super::PostQueryService;
use crate::{
    application::{
        dto::{CategorySummaryDto, PostDto, PostPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{PostFilter, PostSort},
        slug::Slug,
    },
};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;
const MIN_SEARCH_LEN: usize = 2;

/// Raw listing parameters as received from the public API.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub featured: Option<bool>,
    /// Category slug.
    pub category: Option<String>,
    pub search: Option<String>,
    /// `"oldest"` sorts ascending; anything else newest first.
    pub sort: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostPageDto> {
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(ApplicationError::validation("page must be greater than 0"));
        }
        let page = u32::try_from(page)
            .map_err(|_| ApplicationError::validation("page is too large"))?;

        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApplicationError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let mut filter = PostFilter {
            featured: query.featured,
            sort: match query.sort.as_deref() {
                Some("oldest") => PostSort::Oldest,
                _ => PostSort::Newest,
            },
            offset: (i64::from(page) - 1) * limit,
            limit,
            ..PostFilter::default()
        };

        if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
            let not_found =
                || ApplicationError::not_found(format!("no category found with slug: {category}"));
            let slug = Slug::new(category).map_err(|_| not_found())?;
            let category = self
                .category_repo
                .find_by_slug(&slug)
                .await?
                .ok_or_else(not_found)?;
            filter.category_id = Some(category.id);
        }

        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            if search.chars().count() < MIN_SEARCH_LEN {
                return Err(ApplicationError::validation(format!(
                    "search text must be at least {MIN_SEARCH_LEN} characters long"
                )));
            }
            filter.search = Some(search.to_string());
        }

        let (posts, total) = self.read_repo.list(&filter).await?;

        let mut category_ids: Vec<CategoryId> = posts.iter().map(|p| p.category_id).collect();
        category_ids.sort_by_key(|id| id.0);
        category_ids.dedup();
        let categories: HashMap<CategoryId, CategorySummaryDto> = self
            .category_repo
            .find_by_ids(&category_ids)
            .await?
            .iter()
            .map(|c| (c.id, CategorySummaryDto::from(c)))
            .collect();

        let items: Vec<PostDto> = posts
            .into_iter()
            .map(|post| {
                let category = categories.get(&post.category_id).cloned();
                PostDto::from(post).with_category(category)
            })
            .collect();
        // limit is within 1..=100 here
        Ok(PostPageDto::new(items, page, limit as u32, total))
    }
}
