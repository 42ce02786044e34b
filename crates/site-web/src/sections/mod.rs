//! Page Sections

mod code_example;
mod faq;
mod features;
mod footer;
mod hero;
mod navbar;
mod use_cases;

pub use code_example::CodeExample;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::{MobileMenu, Navbar};
pub use use_cases::UseCasesSection;
