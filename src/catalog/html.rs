use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Every `href` of every `<a>` element in `html`, in document order.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = LINK_SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("valid selector"));

    Html::parse_document(html)
        .select(selector)
        .filter_map(|link| link.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

/// Links to `.zip` archives in `html`, in document order.
pub fn archive_links(html: &str) -> Vec<String> {
    extract_hrefs(html)
        .into_iter()
        .filter(|href| href.ends_with(".zip"))
        .collect()
}

/// Last path component of an href, without query string or fragment.
pub fn file_name_of(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_in_order() {
        let html = r#"<html><body>
            <a href="a.html">A</a>
            <a name="anchor">no href</a>
            <p><a href=" b/c.zip ">C</a></p>
        </body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["a.html", "b/c.zip"]);
    }

    #[test]
    fn test_extract_hrefs_from_fragment() {
        assert!(extract_hrefs("not html at all").is_empty());
    }

    #[test]
    fn test_archive_links() {
        let html = r#"<a href="../index.html">up</a><a href="X/FRA_X_City_TMYx.zip">z</a><a href="notes.zip.txt">t</a>"#;
        assert_eq!(archive_links(html), vec!["X/FRA_X_City_TMYx.zip"]);
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(
            file_name_of("IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.zip"),
            "FRA_IDF_Paris.Orly.AP.071490_TMYx.zip"
        );
        assert_eq!(file_name_of("plain.zip"), "plain.zip");
        assert_eq!(file_name_of("dir/file.zip?download=1"), "file.zip");
    }
}
