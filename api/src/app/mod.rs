//! Application services
//!
//! Use-case orchestration over the domain ports. Services are generic over
//! the port traits so tests can wire in-memory implementations.

mod blog_service;
mod contact_service;
mod hero;
mod pricing_service;
pub mod render;
pub mod seo;

pub use blog_service::{
    BlogListing, BlogService, LatestOnly, ListingOutcome, Pagination, RenderedPost, RequestToken,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use contact_service::{ContactService, FormFlow, FormInteraction};
pub use hero::{AnimatedHero, HeroDescriptor, HeroSelector, HeroStrategy, StaticHero};
pub use pricing_service::PricingService;
