//! Domain entities
//!
//! Pure data types and business rules, independent of HTTP, storage, and
//! external services.

mod catalog;
mod category;
mod contact;
mod page;
mod post;
mod pricing;
mod session;

pub use catalog::{Catalog, PortfolioItem, PricingPackage, ProcessStep, TeamMember};
pub use category::{BlogCategory, CategoryId};
pub use contact::{
    BudgetRange, ContactSubmission, FieldError, FormPhase, ProjectType, REQUIRED_FIELDS,
};
pub use page::{Page, PageView, Section};
pub use post::{is_valid_slug, Author, BlogPost, FeaturedImage, PostId, SeoFields};
pub use pricing::{
    convert_package_price, Currency, Feature, PricingInput, Quote, Timeline, MAX_PAGES, MIN_PAGES,
};
pub use session::SessionContext;
