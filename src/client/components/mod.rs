pub mod application_card;
pub mod brand;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod resume_modal;
pub mod toaster;

pub use application_card::ApplicationCard;
pub use brand::BrandButton;
pub use footer::Footer;
pub use layout::AppLayout;
pub use navbar::Navbar;
pub use page::Page;
pub use resume_modal::ResumeModal;
pub use toaster::Toaster;
