use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId(pub i64);

impl PopupId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("popup id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PopupId> for i64 {
    fn from(value: PopupId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Gif => "gif",
        }
    }

    /// Loose check on extension or host. A miss is only worth a warning.
    fn looks_like(self, url: &str) -> bool {
        let lower = url.to_ascii_lowercase();
        let path = lower.split(['?', '#']).next().unwrap_or_default();
        let (extensions, markers): (&[&str], &[&str]) = match self {
            Self::Image => (
                &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".ico"],
                &["image", "img"],
            ),
            Self::Video => (
                &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm", ".mkv", ".m4v"],
                &["video", "youtube", "vimeo"],
            ),
            Self::Gif => (&[".gif"], &["giphy", "tenor"]),
        };
        extensions.iter().any(|ext| path.ends_with(ext))
            || markers.iter().any(|marker| lower.contains(marker))
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute URL of one popup asset, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl(String);

impl MediaUrl {
    pub fn parse(kind: MediaKind, value: &str) -> DomainResult<Self> {
        let value = value.trim();
        Url::parse(value)
            .map_err(|_| DomainError::Validation(format!("please provide a valid {kind} URL")))?;
        if !kind.looks_like(value) {
            tracing::warn!(%kind, url = value, "popup URL does not look like the declared media type");
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The three media slots of a popup; at least one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMedia {
    image: Option<MediaUrl>,
    video: Option<MediaUrl>,
    gif: Option<MediaUrl>,
}

impl PopupMedia {
    /// Blank slots count as absent.
    pub fn new(
        image: Option<&str>,
        video: Option<&str>,
        gif: Option<&str>,
    ) -> DomainResult<Self> {
        let slot = |kind, value: Option<&str>| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| MediaUrl::parse(kind, v))
                .transpose()
        };
        let media = Self {
            image: slot(MediaKind::Image, image)?,
            video: slot(MediaKind::Video, video)?,
            gif: slot(MediaKind::Gif, gif)?,
        };
        if media.kinds().is_empty() {
            return Err(DomainError::Validation(
                "at least one media type (image, video, or gif) is required".into(),
            ));
        }
        Ok(media)
    }

    pub fn image(&self) -> Option<&MediaUrl> {
        self.image.as_ref()
    }

    pub fn video(&self) -> Option<&MediaUrl> {
        self.video.as_ref()
    }

    pub fn gif(&self) -> Option<&MediaUrl> {
        self.gif.as_ref()
    }

    pub fn kinds(&self) -> Vec<MediaKind> {
        [
            (MediaKind::Image, self.image.is_some()),
            (MediaKind::Video, self.video.is_some()),
            (MediaKind::Gif, self.gif.is_some()),
        ]
        .into_iter()
        .filter_map(|(kind, present)| present.then_some(kind))
        .collect()
    }
}
