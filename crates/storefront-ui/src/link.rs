//! Navigation link boundary.

use crate::escape::escape_html;

/// Renders navigational links. Pages with client-side routing supply their
/// own; `AnchorLink` emits plain anchors.
pub trait LinkRenderer {
    fn link(&self, href: &str, class: &str, label: &str) -> String;
}

/// Plain `<a>` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorLink;

impl LinkRenderer for AnchorLink {
    fn link(&self, href: &str, class: &str, label: &str) -> String {
        if class.is_empty() {
            format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(label))
        } else {
            format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                escape_html(href),
                escape_html(class),
                escape_html(label)
            )
        }
    }
}
