//! Common helper UI components

mod back_button;
mod page_container;

pub use back_button::BackButton;
pub use page_container::PageContainer;
