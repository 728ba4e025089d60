//! In-process Markdown renderer.
//!
//! Converts Markdown with pulldown-cmark and wraps it in a standalone HTML
//! document built with [maud](https://maud.lambda.xyz/), so a site can be
//! built on machines without pandoc. Front matter is stripped before
//! conversion; its title has already been resolved by the caller.

use super::backend::{RenderError, Renderer};
use crate::title::body_offset;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

const CSS: &str = "\
body { max-width: 46rem; margin: 2rem auto; padding: 0 1rem; \
font-family: system-ui, sans-serif; line-height: 1.5; color: #111; }
pre, code { font-family: ui-monospace, monospace; }
pre { overflow-x: auto; padding: 0.75rem; background: #f4f4f4; }
a { color: #1a4f9c; }
header.title-block { margin-bottom: 2rem; }";

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for BuiltinRenderer {
    fn name(&self) -> &str {
        "builtin"
    }

    fn render(&self, source: &str, title: &str) -> Result<Vec<u8>, RenderError> {
        let body = markdown_to_html(&source[body_offset(source)..]);
        Ok(standalone_document(title, &body).into_string().into_bytes())
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(markdown, options);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

/// Renders the complete document around already-converted body HTML.
fn standalone_document(title: &str, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                header.title-block {
                    h1.title { (title) }
                }
                main {
                    (PreEscaped(body_html))
                }
            }
        }
    }
}
