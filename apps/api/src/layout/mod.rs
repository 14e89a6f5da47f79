// Page geometry, typography and text measurement for the résumé PDF.
// Pure computation; the PDF objects themselves are built in `render`.

pub mod font_metrics;
pub mod page;

pub use font_metrics::{get_metrics, PdfFont};
pub use page::{default_page_config, PageConfig, Rgb, TextStyle};
