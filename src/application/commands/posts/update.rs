// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::{requested_slug, retry::retry_on_slug_conflict},
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{PostDescription, PostId, PostTitle, PostUpdate},
    },
};

/// Replaces every editable field of a post.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: String,
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
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let title = PostTitle::new(command.title.clone())?;
        let description = PostDescription::new(command.description.clone())?;
        let category_id = CategoryId::new(command.category_id)?;
        let slug_source = existing.slug_source(requested_slug(command.slug.as_deref()), &title);
        let now = self.clock.now();

        let (existing, title, description, command) = (&existing, &title, &description, &command);
        let updated = retry_on_slug_conflict("post", move || async move {
            let slug = match slug_source {
                Some(source) => self.slug_service.generate_unique_slug(source, Some(id)).await?,
                None => existing.slug.clone(),
            };
            self.write_repo
                .update(PostUpdate {
                    id,
                    title: title.clone(),
                    slug,
                    image: command.image.clone(),
                    excerpt: command.excerpt.clone(),
                    description: description.clone(),
                    gallery: command.gallery.clone(),
                    is_featured: command.is_featured,
                    map: command.map.clone(),
                    category_id,
                    updated_at: now,
                })
                .await
        })
        .await?;

        tracing::info!(
            post_id = updated.id.0,
            slug = %updated.slug,
            slug_changed = slug_source.is_some(),
            "post updated"
        );
        Ok(updated.into())
    }
}
