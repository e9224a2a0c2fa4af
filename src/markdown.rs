//! Markdown Renderer
//!
//! pulldown-cmark with:
//! - GFM tables, strikethrough and task lists
//! - Soft line breaks rendered as `<br />`
//! - Raw HTML escaped (shown as text, never injected)
//! - Link and image targets limited to relative, http(s) and mailto URLs
//! - Syntax-highlighted code blocks (syntect) wrapped with a language
//!   label and a copy button

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

/// Trailing glyph shown while a response is being revealed
pub const CURSOR_HTML: &str = r#"<span class="typing-cursor">▌</span>"#;

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render markdown to sanitized, highlighted HTML
pub fn render(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render a prefix of a response with the typing cursor inside its last block
pub fn render_with_cursor(text: &str) -> String {
    attach_cursor(&render(text))
}

/// Insert the cursor before the final closing tag so it sits at the end of
/// the last paragraph/list item rather than on a line of its own.
pub fn attach_cursor(html: &str) -> String {
    let trimmed = html.trim_end();
    match trimmed.rfind("</") {
        Some(pos) if trimmed.ends_with('>') => {
            let mut out = String::with_capacity(trimmed.len() + CURSOR_HTML.len());
            out.push_str(&trimmed[..pos]);
            out.push_str(CURSOR_HTML);
            out.push_str(&trimmed[pos..]);
            out
        }
        _ => format!("{}{}", trimmed, CURSOR_HTML),
    }
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Schemes a rendered link or image may point at
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative URLs and the allowed schemes pass; anything else (`javascript:`,
/// `data:`, `vbscript:` ...) is replaced with `#`.
fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    let trimmed = url.trim_start();
    let safe = match trimmed.find(':') {
        None => true,
        // A colon after the first path, query or fragment delimiter is not a scheme
        Some(colon) if trimmed[..colon].contains(['/', '?', '#']) => true,
        Some(colon) => SAFE_SCHEMES
            .iter()
            .any(|scheme| trimmed[..colon].eq_ignore_ascii_case(scheme)),
    };
    if safe {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Transform parser events: sanitize raw HTML and URLs, hard breaks, code blocks
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|l| l.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: sanitize_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: sanitize_url(dest_url),
                        title,
                        id,
                    }));
                }
                // Raw HTML from the model is displayed, not executed
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = code_block_html(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    // Unterminated fence at end of input (common while revealing)
    if let State::InCodeBlock { lang, content } = state {
        events.push(Event::Html(CowStr::from(code_block_html(&content, lang.as_deref()))));
    }

    events
}

fn code_block_html(code: &str, lang: Option<&str>) -> String {
    let label = lang.filter(|l| !l.is_empty()).unwrap_or("code");
    format!(
        concat!(
            r#"<div class="code-block-wrapper">"#,
            r#"<div class="code-header"><span class="code-language">{}</span>"#,
            r#"<button class="code-copy-btn" type="button">📋 Copy</button></div>"#,
            "{}</div>\n"
        ),
        escape_html(label),
        highlight_code(code, lang)
    )
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render("# Title\n\nSome **bold** text");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_soft_breaks_become_br() {
        let html = render("line one\nline two");
        assert!(html.contains("line one<br />"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let block = render("<div onclick=\"x()\">hi</div>");
        assert!(!block.contains("<div onclick"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render("[click me](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click me</a>"##));

        for unsafe_md in [
            "[x](JavaScript:alert(1))",
            "[x]( vbscript:msgbox)",
            "![img](data:text/html;base64,PHNjcmlwdD4=)",
            "<javascript:alert(1)>",
        ] {
            let html = render(unsafe_md).to_ascii_lowercase();
            assert!(html.contains(r##"="#""##), "{}", html);
            for scheme in ["javascript:", "vbscript:", "data:"] {
                assert!(!html.contains(&format!("=\"{}", scheme)), "{}", html);
            }
        }
    }

    #[test]
    fn test_safe_links_are_kept() {
        assert!(render("[docs](https://example.com/a?b=c:d)").contains(r#"href="https://example.com/a?b=c:d""#));
        assert!(render("[mail](mailto:team@axio.dev)").contains(r#"href="mailto:team@axio.dev""#));
        assert!(render("[rel](./guide/setup:linux)").contains(r#"href="./guide/setup:linux""#));
        assert!(render("[anchor](#top)").contains(r##"href="#top""##));
    }

    #[test]
    fn test_code_block_decoration() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<div class="code-block-wrapper">"#));
        assert!(html.contains(r#"<span class="code-language">rust</span>"#));
        assert!(html.contains("code-copy-btn"));
        assert!(html.contains("<pre"));
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render("```\nplain\n```");
        assert!(html.contains(r#"<span class="code-language">code</span>"#));
        assert!(html.contains("plain"));
    }

    #[test]
    fn test_unterminated_fence_still_renders() {
        let html = render("```python\nprint(1)");
        assert!(html.contains("code-block-wrapper"));
        assert!(html.contains("print"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_cursor_sits_inside_last_block() {
        let html = render_with_cursor("Hello");
        assert_eq!(html, format!("<p>Hello{}</p>", CURSOR_HTML));
    }

    #[test]
    fn test_cursor_on_plain_text() {
        assert_eq!(attach_cursor(""), CURSOR_HTML);
        assert_eq!(attach_cursor("abc"), format!("abc{}", CURSOR_HTML));
    }
}
