//! Section Renderer and share-page HTML.

pub mod html;
pub mod sections;

pub use html::render_page_html;
pub use sections::PortfolioPage;
