//! Standalone HTML page output

use crate::theme::StyleSheets;

/// Wrap a highlighted fragment in a complete HTML document
pub fn render_page(fragment: &str, sheets: &StyleSheets) -> String {
    let mut page = String::with_capacity(fragment.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if !sheets.is_empty() {
        page.push_str(&sheets.to_html());
        page.push('\n');
    }
    page.push_str("</head>\n<body>\n<pre>");
    page.push_str(fragment);
    page.push_str("</pre>\n</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;
    use crate::theme::Theme;

    #[test]
    fn test_page_layout() {
        let mut sheets = StyleSheets::new();
        Theme::default().install(&mut sheets);
        let page = render_page(&highlight("[1]"), &sheets);

        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<style type=\"text/css\" id=\"json-highlight\">pre {outline"));
        assert!(page.contains("<pre>[<span class=\"number\">1</span>]</pre>"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_page_without_styles() {
        let page = render_page("x", &StyleSheets::new());
        assert!(!page.contains("<style"));
        assert!(page.contains("<head>\n<meta charset=\"utf-8\">\n</head>"));
    }
}
