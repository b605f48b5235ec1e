//! Sitemap XML rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>http://test-site.com/hello</loc>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```

use data_model_sitemap::SitemapError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::config::SitemapConfig;
use crate::links::Result;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders `links` as a sitemap, stamping each entry with the configured changefreq and priority.
pub fn render_sitemap<S: AsRef<str>>(links: &[S], config: &SitemapConfig) -> Result<String> {
    let priority = config.priority_text();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;
    for link in links {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", link.as_ref())?;
        write_text_element(&mut writer, "changefreq", config.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", &priority)?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| SitemapError::Render(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChangeFreq;

    fn config() -> SitemapConfig {
        SitemapConfig::builder("test-site.com", "/sitemap.xml").build().unwrap()
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = render_sitemap::<String>(&[], &config()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_link() {
        let xml = render_sitemap(&["http://test-site.com/hello"], &config()).unwrap();

        assert!(xml.contains("<url>"));
        assert!(xml.contains("<loc>http://test-site.com/hello</loc>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.contains("</url>"));
    }

    #[test]
    fn test_sitemap_keeps_link_order() {
        let links = ["http://test-site.com/b", "http://test-site.com/a", "http://test-site.com/c"];
        let xml = render_sitemap(&links, &config()).unwrap();

        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
        let b = xml.find("/b</loc>").unwrap();
        let a = xml.find("/a</loc>").unwrap();
        let c = xml.find("/c</loc>").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_sitemap_uses_configured_defaults() {
        let config = SitemapConfig::builder("test-site.com", "/sitemap.xml")
            .changefreq(ChangeFreq::Weekly)
            .priority(1.0)
            .build()
            .unwrap();
        let xml = render_sitemap(&["http://test-site.com/"], &config).unwrap();

        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = render_sitemap(&["http://test-site.com/search?q=a&b=c"], &config()).unwrap();

        assert!(xml.contains("<loc>http://test-site.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = render_sitemap(&["http://test-site.com/"], &config()).unwrap();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }
}
