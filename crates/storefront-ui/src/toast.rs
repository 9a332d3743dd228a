//! Transient notifications ("toasts").
//!
//! Components report through the `Notifier` trait. `ToastQueue` collects the
//! toasts raised while handling one request and renders them as an HTML
//! fragment; `TOAST_SCRIPT` applies the auto-close and click-to-dismiss
//! options in the browser.

use std::cell::RefCell;
use std::time::Duration;

use crate::escape::escape_html;

/// Screen corner a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
    TopCenter,
    TopLeft,
    BottomRight,
    BottomCenter,
    BottomLeft,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::TopCenter => "top-center",
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
            Self::BottomCenter => "bottom-center",
            Self::BottomLeft => "bottom-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTheme {
    Light,
    Dark,
    /// Background colored by toast kind.
    Colored,
}

impl ToastTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colored => "colored",
        }
    }
}

/// Display options for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close: Duration,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub theme: ToastTheme,
}

impl ToastOptions {
    /// Options used for every product page toast.
    pub const DEFAULT: ToastOptions = ToastOptions {
        position: ToastPosition::TopRight,
        auto_close: Duration::from_millis(1000),
        close_on_click: true,
        pause_on_hover: false,
        theme: ToastTheme::Colored,
    };
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A raised notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub options: ToastOptions,
}

impl Toast {
    pub fn render(&self) -> String {
        let role = match self.kind {
            ToastKind::Success => "status",
            ToastKind::Error => "alert",
        };

        format!(
            r#"<div class="toast toast--{kind} toast--{theme}" role="{role}" data-auto-close="{auto_close}" data-close-on-click="{close_on_click}" data-pause-on-hover="{pause_on_hover}">{message}</div>"#,
            kind = self.kind.as_str(),
            theme = self.options.theme.as_str(),
            role = role,
            auto_close = self.options.auto_close.as_millis(),
            close_on_click = self.options.close_on_click,
            pause_on_hover = self.options.pause_on_hover,
            message = escape_html(&self.message),
        )
    }
}

/// Notification boundary.
pub trait Notifier {
    fn success(&self, message: &str, options: &ToastOptions);
    fn error(&self, message: &str, options: &ToastOptions);
}

/// Collects toasts raised during one request.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: RefCell<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: ToastKind, message: &str, options: &ToastOptions) {
        self.toasts.borrow_mut().push(Toast {
            kind,
            message: message.to_string(),
            options: *options,
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }

    /// Snapshot of the queued toasts in the order raised.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Render queued toasts grouped into one container per position.
    pub fn render(&self) -> String {
        let toasts = self.toasts.borrow();
        let mut positions: Vec<ToastPosition> = Vec::new();
        for toast in toasts.iter() {
            if !positions.contains(&toast.options.position) {
                positions.push(toast.options.position);
            }
        }

        positions
            .into_iter()
            .map(|position| {
                let items: String = toasts
                    .iter()
                    .filter(|t| t.options.position == position)
                    .map(Toast::render)
                    .collect();
                format!(
                    r#"<div class="toast-container toast-container--{pos}" data-position="{pos}">{items}</div>"#,
                    pos = position.as_str(),
                    items = items
                )
            })
            .collect()
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str, options: &ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    fn error(&self, message: &str, options: &ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }
}

/// Browser script: submits add-to-cart forms in place, mounts the returned
/// toast fragment into `#toast-root` and applies each toast's data options.
///
/// `#toast-root` holds at most one container per position. Incoming toasts
/// join the existing container, and a container is removed with its last
/// toast.
pub const TOAST_SCRIPT: &str = r#"
(function () {
  var root = document.getElementById('toast-root');
  function dismiss(toast) {
    var container = toast.parentNode;
    toast.remove();
    if (container && container !== root && !container.querySelector('.toast')) {
      container.remove();
    }
  }
  function arm(toast) {
    var delay = parseInt(toast.dataset.autoClose, 10);
    var timer = setTimeout(function () { dismiss(toast); }, delay);
    if (toast.dataset.closeOnClick === 'true') {
      toast.addEventListener('click', function () { dismiss(toast); });
    }
    if (toast.dataset.pauseOnHover === 'true') {
      toast.addEventListener('mouseenter', function () { clearTimeout(timer); });
      toast.addEventListener('mouseleave', function () {
        timer = setTimeout(function () { dismiss(toast); }, delay);
      });
    }
  }
  function mount(incoming) {
    var selector = '.toast-container[data-position="' + incoming.dataset.position + '"]';
    var container = root.querySelector(selector);
    if (!container) {
      root.appendChild(incoming);
      return;
    }
    while (incoming.firstChild) { container.appendChild(incoming.firstChild); }
  }
  document.querySelectorAll('form[data-add-to-cart]').forEach(function (form) {
    form.addEventListener('submit', function (ev) {
      ev.preventDefault();
      fetch(form.action, { method: 'POST', credentials: 'same-origin' })
        .then(function (res) { return res.text(); })
        .then(function (html) {
          var holder = document.createElement('div');
          holder.innerHTML = html;
          holder.querySelectorAll('.toast').forEach(arm);
          Array.prototype.slice.call(holder.querySelectorAll('.toast-container')).forEach(mount);
        });
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ToastOptions::default();
        assert_eq!(opts.position, ToastPosition::TopRight);
        assert_eq!(opts.auto_close, Duration::from_millis(1000));
        assert!(opts.close_on_click);
        assert!(!opts.pause_on_hover);
        assert_eq!(opts.theme, ToastTheme::Colored);
    }

    #[test]
    fn test_queue_records_in_order() {
        let queue = ToastQueue::new();
        assert!(queue.is_empty());

        queue.success("saved", &ToastOptions::DEFAULT);
        queue.error("oops", &ToastOptions::DEFAULT);

        let toasts = queue.toasts();
        assert_eq!(queue.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "oops");
    }

    #[test]
    fn test_toast_render() {
        let toast = Toast {
            kind: ToastKind::Error,
            message: "<nope>".to_string(),
            options: ToastOptions::DEFAULT,
        };
        let html = toast.render();

        assert!(html.contains(r#"class="toast toast--error toast--colored""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(r#"data-auto-close="1000""#));
        assert!(html.contains(r#"data-close-on-click="true""#));
        assert!(html.contains(r#"data-pause-on-hover="false""#));
        assert!(html.contains("&lt;nope&gt;"));
    }

    #[test]
    fn test_queue_render_groups_by_position() {
        let queue = ToastQueue::new();
        let bottom = ToastOptions {
            position: ToastPosition::BottomLeft,
            ..ToastOptions::DEFAULT
        };
        queue.success("one", &ToastOptions::DEFAULT);
        queue.success("two", &bottom);
        queue.error("three", &ToastOptions::DEFAULT);

        let html = queue.render();
        assert_eq!(html.matches("toast-container--top-right").count(), 1);
        assert_eq!(html.matches("toast-container--bottom-left").count(), 1);
        assert_eq!(html.matches(r#"<div class="toast "#).count(), 3);
        assert!(html.contains(r#"toast-container--top-right" data-position="top-right">"#));
        assert!(html.contains(r#"data-position="bottom-left">"#));
    }

    #[test]
    fn test_script_reuses_one_container_per_position() {
        // Containers are looked up by the same attribute `render` writes.
        assert!(TOAST_SCRIPT.contains(r#"'.toast-container[data-position="'"#));
        assert!(TOAST_SCRIPT.contains("root.querySelector(selector)"));
        assert!(TOAST_SCRIPT.contains("forEach(mount)"));
        assert!(!TOAST_SCRIPT.contains("root.appendChild(holder.firstChild)"));

        // Every dismissal path goes through the helper that drops empty containers.
        assert!(TOAST_SCRIPT.contains("container.remove()"));
        assert!(!TOAST_SCRIPT.contains("toast.remove(); }"));
        assert_eq!(TOAST_SCRIPT.matches("{ dismiss(toast); }").count(), 3);
    }

    #[test]
    fn test_empty_queue_renders_nothing() {
        assert_eq!(ToastQueue::new().render(), "");
    }
}
