//! Pure rendering for localized landing pages: page HTML and sitemap XML.
//! All filesystem I/O lives in the CLI crate.

pub mod html;
pub mod icons;
pub mod page;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod testutil;

pub use page::render_page;
pub use sitemap::render_sitemap;
