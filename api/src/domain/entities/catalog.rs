//! Hand-authored display content
//!
//! Portfolio items, pricing packages, process steps, and team members are
//! static records with no lifecycle; they are built once and served as-is.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub slug: String,
    pub title: String,
    pub client: String,
    pub summary: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPackage {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    /// Authored in INR; converted for display via the fixed rate table
    pub price_inr: i64,
    pub includes: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub order: u8,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,
}

/// Everything hand-authored, bundled for the handlers
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub portfolio: Vec<PortfolioItem>,
    pub packages: Vec<PricingPackage>,
    pub process: Vec<ProcessStep>,
    pub team: Vec<TeamMember>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            portfolio: vec![
                PortfolioItem {
                    slug: "meridian-coffee".to_string(),
                    title: "Meridian Coffee Roasters".to_string(),
                    client: "Meridian Coffee".to_string(),
                    summary: "E-commerce storefront with subscriptions and wholesale ordering."
                        .to_string(),
                    image_url: "/assets/work/meridian.webp".to_string(),
                    tags: vec!["ecommerce".to_string(), "branding".to_string()],
                    url: Some("https://meridian.example".to_string()),
                },
                PortfolioItem {
                    slug: "harbor-clinic".to_string(),
                    title: "Harbor Dental Clinic".to_string(),
                    client: "Harbor Clinic".to_string(),
                    summary: "Appointment booking and patient-facing brochure site.".to_string(),
                    image_url: "/assets/work/harbor.webp".to_string(),
                    tags: vec!["booking".to_string(), "healthcare".to_string()],
                    url: None,
                },
                PortfolioItem {
                    slug: "atlas-logistics".to_string(),
                    title: "Atlas Logistics Portal".to_string(),
                    client: "Atlas Logistics".to_string(),
                    summary: "Shipment tracking dashboard and marketing site.".to_string(),
                    image_url: "/assets/work/atlas.webp".to_string(),
                    tags: vec!["web-app".to_string(), "dashboard".to_string()],
                    url: None,
                },
            ],
            packages: vec![
                PricingPackage {
                    slug: "starter".to_string(),
                    name: "Starter".to_string(),
                    tagline: "A sharp single-page presence".to_string(),
                    price_inr: 35_000,
                    includes: vec![
                        "Single page design".to_string(),
                        "Responsive build".to_string(),
                        "Contact form".to_string(),
                    ],
                    highlighted: false,
                },
                PricingPackage {
                    slug: "business".to_string(),
                    name: "Business".to_string(),
                    tagline: "Multi-page site with a blog".to_string(),
                    price_inr: 85_000,
                    includes: vec![
                        "Up to 8 pages".to_string(),
                        "CMS-backed blog".to_string(),
                        "SEO setup".to_string(),
                        "Analytics wiring".to_string(),
                    ],
                    highlighted: true,
                },
                PricingPackage {
                    slug: "commerce".to_string(),
                    name: "Commerce".to_string(),
                    tagline: "Full e-commerce build".to_string(),
                    price_inr: 180_000,
                    includes: vec![
                        "Product catalog".to_string(),
                        "Payments and checkout".to_string(),
                        "Order notifications".to_string(),
                        "3 months support".to_string(),
                    ],
                    highlighted: false,
                },
            ],
            process: vec![
                ProcessStep {
                    order: 1,
                    name: "Discover".to_string(),
                    description: "We learn your business, audience, and goals.".to_string(),
                },
                ProcessStep {
                    order: 2,
                    name: "Design".to_string(),
                    description: "Wireframes, then polished visual design in your brand."
                        .to_string(),
                },
                ProcessStep {
                    order: 3,
                    name: "Build".to_string(),
                    description: "Fast, accessible implementation with measurable performance."
                        .to_string(),
                },
                ProcessStep {
                    order: 4,
                    name: "Launch".to_string(),
                    description: "Deployment, analytics, and a handover you can actually use."
                        .to_string(),
                },
            ],
            team: vec![
                TeamMember {
                    name: "Priya Raman".to_string(),
                    role: "Founder & Creative Director".to_string(),
                    bio: "Fifteen years of brand and product design.".to_string(),
                    image_url: Some("/assets/team/priya.webp".to_string()),
                },
                TeamMember {
                    name: "Dev Kapoor".to_string(),
                    role: "Lead Engineer".to_string(),
                    bio: "Builds the fast parts and keeps them fast.".to_string(),
                    image_url: Some("/assets/team/dev.webp".to_string()),
                },
                TeamMember {
                    name: "Sana Iqbal".to_string(),
                    role: "Project Lead".to_string(),
                    bio: "Keeps every project on schedule and in scope.".to_string(),
                    image_url: None,
                },
            ],
        }
    }
}
