// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::{requested_slug, retry::retry_on_slug_conflict},
        dto::PostDto,
        error::ApplicationResult,
    },
    domain::{
        category::CategoryId,
        post::{NewPost, PostDescription, PostTitle},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    /// Explicit slug candidate; the title is used when absent.
    pub slug: Option<String>,
    pub description: String,
    pub category_id: i64,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub gallery: Vec<String>,
    pub is_featured: bool,
    pub map: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title.clone())?;
        let description = PostDescription::new(command.description.clone())?;
        let category_id = CategoryId::new(command.category_id)?;
        let base = requested_slug(command.slug.as_deref()).unwrap_or(title.as_str());
        let now = self.clock.now();

        let (title, description, command) = (&title, &description, &command);
        let created = retry_on_slug_conflict("post", move || async move {
            let slug = self.slug_service.generate_unique_slug(base, None).await?;
            self.write_repo
                .insert(NewPost {
                    title: title.clone(),
                    slug,
                    image: command.image.clone(),
                    excerpt: command.excerpt.clone(),
                    description: description.clone(),
                    gallery: command.gallery.clone(),
                    is_featured: command.is_featured,
                    map: command.map.clone(),
                    category_id,
                    created_at: now,
                    updated_at: now,
                })
                .await
        })
        .await?;

        tracing::info!(post_id = created.id.0, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
