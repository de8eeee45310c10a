// =============================================================================
// Campana Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Marketing Pages
// 2. Content Pages
// 3. Legal and Fallback Pages
// =============================================================================

pub mod about;
pub mod blog;
pub mod contact;
pub mod faq;
pub mod home;
pub mod how_it_works;
pub mod legal;
pub mod not_found;
pub mod pricing;
pub mod security;
pub mod solutions;
pub mod technology;

// 1. Marketing Pages
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use pricing::PricingPage;
pub use security::SecurityPage;
pub use solutions::{ForAgenciesPage, ForBusinessesPage};
pub use technology::TechnologyPage;

// 2. Content Pages
pub use about::AboutPage;
pub use blog::{BlogPage, BlogPostPage};
pub use contact::ContactPage;
pub use faq::FaqPage;

// 3. Legal and Fallback Pages
pub use legal::LegalPage;
pub use not_found::NotFoundPage;
