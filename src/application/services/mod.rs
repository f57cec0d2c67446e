// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, popups::PopupCommandService,
            posts::PostCommandService,
        },
        ports::{time::Clock, util::Transliterator},
        queries::{
            categories::CategoryQueryService, popups::PopupQueryService, posts::PostQueryService,
        },
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository, services::CategorySlugService},
        popup::{PopupReadRepository, PopupWriteRepository},
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        slug::{SlugNormalizer, UniqueSlugResolver},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub popup_commands: Arc<PopupCommandService>,
    pub popup_queries: Arc<PopupQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        popup_write_repo: Arc<dyn PopupWriteRepository>,
        popup_read_repo: Arc<dyn PopupReadRepository>,
        clock: Arc<dyn Clock>,
        transliterator: Arc<dyn Transliterator>,
    ) -> Self {
        let resolver = UniqueSlugResolver::new(SlugNormalizer::new(
            Arc::clone(&transliterator),
            Arc::clone(&clock),
        ));

        let post_slugs = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            resolver.clone(),
        ));
        let category_slugs = Arc::new(CategorySlugService::new(
            Arc::clone(&category_read_repo),
            resolver,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            post_slugs,
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&category_read_repo),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            category_slugs,
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_read_repo)));

        let popup_commands = Arc::new(PopupCommandService::new(
            popup_write_repo,
            Arc::clone(&popup_read_repo),
            Arc::clone(&clock),
        ));
        let popup_queries = Arc::new(PopupQueryService::new(popup_read_repo));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            popup_commands,
            popup_queries,
        }
    }
}
