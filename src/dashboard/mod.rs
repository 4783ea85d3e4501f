pub mod page;
pub mod render;

pub use page::{OverviewView, Page, PageView};
pub use render::render_text;
