use super::html::escape;

/// Render a sitemap for absolute page URLs
pub fn render_sitemap<'a>(urls: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        out.push_str(&format!("  <url><loc>{}</loc></url>\n", escape(url)));
    }
    out.push_str("</urlset>\n");
    out
}
