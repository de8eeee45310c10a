// =============================================================================
// Campana Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components (shell, head, header, footer, banner)
// 2. Common Components (sections, lists, CTA)
// 3. Form Components
// 4. ROI Calculator
// =============================================================================

pub mod common;
pub mod cookie_banner;
pub mod cta_block;
pub mod footer;
pub mod forms;
pub mod head;
pub mod header;
pub mod language_switcher;
pub mod layout;
pub mod roi_calculator;
pub mod section;
pub mod theme_toggle;

pub use common::{CardGrid, CheckList, GroupGrid, JsonLd};
pub use cookie_banner::CookieBanner;
pub use cta_block::CtaBlock;
pub use footer::Footer;
pub use forms::{TextArea, TextInput};
pub use head::PageHead;
pub use header::Header;
pub use language_switcher::LanguageSwitcher;
pub use layout::Layout;
pub use roi_calculator::RoiCalculator;
pub use section::Section;
pub use theme_toggle::ThemeToggle;
