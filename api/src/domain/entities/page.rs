//! Site page identifiers and view descriptors
//!
//! Pages are a closed set; dispatch is an exhaustive match so adding a page
//! without a descriptor fails to compile.

use serde::Serialize;

/// Every navigable page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Pricing,
    Portfolio,
    Blog,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Pricing,
        Page::Portfolio,
        Page::Blog,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Pricing => "pricing",
            Page::Portfolio => "portfolio",
            Page::Blog => "blog",
            Page::Contact => "contact",
        }
    }

    /// Path segment used in the sitemap ("" for the root)
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "about",
            Page::Services => "services",
            Page::Pricing => "pricing",
            Page::Portfolio => "portfolio",
            Page::Blog => "blog",
            Page::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "services" => Ok(Page::Services),
            "pricing" => Ok(Page::Pricing),
            "portfolio" => Ok(Page::Portfolio),
            "blog" => Ok(Page::Blog),
            "contact" => Ok(Page::Contact),
            _ => Err(format!("Unknown page: {}", s)),
        }
    }
}

/// Named content sections composing a page, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    Services,
    Process,
    Portfolio,
    Testimonials,
    Team,
    PricingPackages,
    PricingCalculator,
    BlogListing,
    ContactForm,
    CallToAction,
}

/// What a page renders: metadata plus an ordered section list
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub page: Page,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl Page {
    /// Single dispatch point for page composition
    pub fn view(self) -> PageView {
        let (title, description, sections): (&str, &str, Vec<Section>) = match self {
            Page::Home => (
                "Lumina Studio — Web Design & Development",
                "We design and build fast, modern websites for growing businesses.",
                vec![
                    Section::Hero,
                    Section::Services,
                    Section::Portfolio,
                    Section::Testimonials,
                    Section::CallToAction,
                ],
            ),
            Page::About => (
                "About Us",
                "The people and process behind Lumina Studio.",
                vec![Section::Hero, Section::Team, Section::Process],
            ),
            Page::Services => (
                "Services",
                "Custom websites, e-commerce, and web applications.",
                vec![Section::Hero, Section::Services, Section::CallToAction],
            ),
            Page::Pricing => (
                "Pricing",
                "Transparent packages and an instant project estimate.",
                vec![
                    Section::Hero,
                    Section::PricingPackages,
                    Section::PricingCalculator,
                ],
            ),
            Page::Portfolio => (
                "Our Work",
                "Selected projects we have shipped.",
                vec![Section::Hero, Section::Portfolio, Section::CallToAction],
            ),
            Page::Blog => (
                "Blog",
                "Notes on design, engineering, and running a studio.",
                vec![Section::Hero, Section::BlogListing],
            ),
            Page::Contact => (
                "Contact",
                "Tell us about your project.",
                vec![Section::Hero, Section::ContactForm],
            ),
        };
        PageView {
            page: self,
            title: title.to_string(),
            description: description.to_string(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_parses_its_own_slug() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!("careers".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn every_page_has_a_nonempty_view() {
        for page in Page::ALL {
            let view = page.view();
            assert!(!view.title.is_empty());
            assert!(!view.description.is_empty());
            assert!(!view.sections.is_empty(), "{} has no sections", page);
        }
    }

    #[test]
    fn home_leads_with_hero() {
        assert_eq!(Page::Home.view().sections[0], Section::Hero);
    }

    #[test]
    fn contact_page_carries_the_form() {
        assert!(Page::Contact
            .view()
            .sections
            .contains(&Section::ContactForm));
    }
}
