pub mod categories;
pub mod popups;
pub mod posts;

pub use categories::{CategoryDto, CategorySummaryDto};
pub use popups::{DeletedPopupDto, PopupDto};
pub use posts::{PostDto, PostPageDto};
