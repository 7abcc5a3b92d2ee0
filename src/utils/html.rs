use ammonia;
use pulldown_cmark::{Options, Parser, html};

/// Renders backend markdown to HTML, then sanitises it with ammonia.
///
/// Generated material is untrusted: raw HTML inside the markdown passes
/// through the parser untouched, so the whitelist pass strips <script>,
/// event handlers and the like before the page embeds it.
pub fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, options);
    let mut unsafe_html = String::with_capacity(input.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);

    ammonia::clean(&unsafe_html)
}

/// Positional label of an option: 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn option_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}
