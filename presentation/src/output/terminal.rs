//! Render HTML fragments as terminal text
//!
//! Line breaks become newlines, non-breaking spaces become spaces, and
//! emphasised spans are highlighted. Everything else is flattened to its text.

use colored::Colorize;
use scraper::{ElementRef, Html, Node};

const HIGHLIGHT_CLASS: &str = "bold-orange";

/// Convert a formatted fragment to readable terminal text
pub fn fragment_to_terminal(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    let mut out = String::with_capacity(fragment.len());
    render_children(document.root_element(), &mut out, false);
    collapse_blank_lines(&out.replace('\u{a0}', " "))
}

fn render_children(element: ElementRef, out: &mut String, emphasis: bool) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text: &str = text;
                if emphasis {
                    out.push_str(&text.bold().yellow().to_string());
                } else {
                    out.push_str(text);
                }
            }
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                match el.name() {
                    "br" => out.push('\n'),
                    "strong" | "b" => render_children(child_el, out, true),
                    "span" if has_class(el.attr("class"), HIGHLIGHT_CLASS) => {
                        render_children(child_el, out, true)
                    }
                    "div" | "p" | "h4" => {
                        ensure_line_start(out);
                        let heading = el.name() == "h4";
                        render_children(child_el, out, emphasis || heading);
                        ensure_line_start(out);
                    }
                    "img" => {
                        if let Some(src) = el.attr("src") {
                            out.push_str(&format!("[image: {}]", src).dimmed().to_string());
                        }
                    }
                    _ => render_children(child_el, out, emphasis),
                }
            }
            _ => {}
        }
    }
}

fn has_class(class_attr: Option<&str>, class: &str) -> bool {
    class_attr.is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Trim trailing spaces per line and keep at most one blank line in a row
fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 || lines.is_empty() {
                continue;
            }
            lines.push("");
        } else {
            blank_run = 0;
            lines.push(line);
        }
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(fragment: &str) -> String {
        colored::control::set_override(false);
        fragment_to_terminal(fragment)
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(plain("Visit Lahore"), "Visit Lahore");
    }

    #[test]
    fn test_strong_keeps_text() {
        assert_eq!(plain("Visit <strong>Hunza</strong> now"), "Visit Hunza now");
    }

    #[test]
    fn test_plan_fragment_layout() {
        let fragment = concat!(
            r#"<br>&nbsp;&nbsp;&nbsp;<span class="bold-orange">Day 1<br></span>"#,
            "\n<br>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;* Lahore Fort",
            "\n<br>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;* Food Street"
        );
        assert_eq!(
            plain(fragment),
            "   Day 1\n\n     * Lahore Fort\n\n     * Food Street"
        );
    }

    #[test]
    fn test_hotel_card_shows_image_link() {
        let card = r#"<div><h4>Serena</h4><p><a href="s.jpg" target="_blank"><img class="hotel-img" src="s.jpg" alt="Serena" /></a></p></div>"#;
        assert_eq!(plain(card), "Serena\n[image: s.jpg]");
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(plain(""), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("\n\na  \n\n\n\nb\n\n"), "a\n\nb");
    }

    #[test]
    fn test_has_class() {
        assert!(has_class(Some("x bold-orange"), "bold-orange"));
        assert!(!has_class(Some("bold-orange-ish"), "bold-orange"));
        assert!(!has_class(None, "bold-orange"));
    }
}
