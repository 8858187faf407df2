//! Server-rendered single page: title picker plus recommendation output

use crate::models::RecommendationView;

pub const PAGE_HEADING: &str = "🎬 Movie Recommendation System";
pub const SHOW_BUTTON_LABEL: &str = "Show Recommendation";
pub const LINK_NOT_FOUND: &str = "IMDb link not found";

const BACKGROUND_IMAGE: &str =
    "https://c1.wallpaperflare.com/preview/570/413/91/interior-theatre-theater-empty-theater.jpg";

/// What the output region below the picker shows
#[derive(Debug, Clone, Copy)]
pub enum PageOutput<'a> {
    /// Nothing requested yet
    Empty,
    Recommendations(&'a [RecommendationView]),
    UnknownTitle(&'a str),
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full page
///
/// `selected` is pre-selected in the dropdown when it names a listed title.
pub fn render_page<'a, I>(titles: I, selected: Option<&str>, output: PageOutput<'_>) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Movie Recommendation System</title>\n");
    html.push_str(&format!(
        "<style>\n\
         body {{ background-image: url(\"{}\"); background-size: cover; \
         font-family: sans-serif; color: #fff; }}\n\
         main {{ max-width: 48rem; margin: 2rem auto; padding: 1.5rem; \
         background: rgba(0, 0, 0, 0.7); border-radius: 0.5rem; }}\n\
         a {{ color: #f5c518; }}\n\
         .missing {{ color: #aaa; font-style: italic; }}\n\
         </style>\n",
        BACKGROUND_IMAGE
    ));
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", PAGE_HEADING));

    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"movie\">Type or select a movie from the dropdown</label>\n");
    html.push_str("<select id=\"movie\" name=\"movie\">\n");
    for title in titles {
        let escaped = escape_html(title);
        let marker = if selected == Some(title) { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escaped, marker, escaped
        ));
    }
    html.push_str("</select>\n");
    html.push_str(&format!(
        "<button type=\"submit\">{}</button>\n",
        SHOW_BUTTON_LABEL
    ));
    html.push_str("</form>\n");

    match output {
        PageOutput::Empty => {}
        PageOutput::Recommendations(views) => {
            html.push_str("<section class=\"recommendations\">\n");
            for view in views {
                html.push_str(&format!("<h3>{}</h3>\n", escape_html(&view.title)));
                match &view.imdb_url {
                    Some(url) => html.push_str(&format!(
                        "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">View on IMDb</a></p>\n",
                        escape_html(url)
                    )),
                    None => html.push_str(&format!(
                        "<p class=\"missing\">{}</p>\n",
                        LINK_NOT_FOUND
                    )),
                }
            }
            html.push_str("</section>\n");
        }
        PageOutput::UnknownTitle(title) => html.push_str(&format!(
            "<p class=\"missing\">No movie titled &quot;{}&quot; in the catalog.</p>\n",
            escape_html(title)
        )),
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(title: &str, imdb_url: Option<&str>) -> RecommendationView {
        RecommendationView {
            title: title.to_string(),
            score: 0.5,
            imdb_url: imdb_url.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<Tom & Jerry's "Movie">"#),
            "&lt;Tom &amp; Jerry&#39;s &quot;Movie&quot;&gt;"
        );
        assert_eq!(escape_html("Amélie"), "Amélie");
    }

    #[test]
    fn test_dropdown_lists_titles_in_order_with_selection() {
        let html = render_page(["Heat", "Ronin", "Thief"], Some("Ronin"), PageOutput::Empty);

        let heat = html.find("<option value=\"Heat\">Heat</option>").unwrap();
        let ronin = html
            .find("<option value=\"Ronin\" selected>Ronin</option>")
            .unwrap();
        let thief = html.find("<option value=\"Thief\">Thief</option>").unwrap();
        assert!(heat < ronin && ronin < thief);
        assert!(html.contains(SHOW_BUTTON_LABEL));
        assert!(!html.contains("recommendations"));
    }

    #[test]
    fn test_missing_link_marker_is_per_item() {
        let views = vec![
            view("Alien", Some("https://www.imdb.com/title/tt0078748/")),
            view("Aliens", None),
        ];
        let html = render_page(["Alien", "Aliens"], None, PageOutput::Recommendations(&views));

        assert!(html.contains("<h3>Alien</h3>"));
        assert!(html.contains("href=\"https://www.imdb.com/title/tt0078748/\""));
        assert!(html.contains("<h3>Aliens</h3>"));
        assert_eq!(html.matches(LINK_NOT_FOUND).count(), 1);
    }

    #[test]
    fn test_titles_are_escaped_everywhere() {
        let views = vec![view("<script>", None)];
        let html = render_page(["<script>"], None, PageOutput::Recommendations(&views));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unknown_title_notice() {
        let html = render_page(["Heat"], None, PageOutput::UnknownTitle("Heath"));
        assert!(html.contains("No movie titled &quot;Heath&quot; in the catalog."));

        let html = render_page(["Heat"], None, PageOutput::UnknownTitle("\"Heat\""));
        assert!(html.contains("No movie titled &quot;&quot;Heat&quot;&quot; in the catalog."));
    }
}
