//! Transient toast notifications rendered straight into the document.
//!
//! Toasts outlive the component that raised them (a cancelled order may
//! refetch and re-render the whole list), so they attach to `<body>` rather
//! than living in the view tree. Each one removes itself after a few
//! seconds.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS classes applied to the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
const TOAST_MS: u32 = 3_000;

/// Show a transient notification. No-op outside the browser.
pub fn notify(kind: ToastKind, message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(element) = document.create_element("div") else {
            return;
        };
        element.set_class_name(kind.css_class());
        element.set_text_content(Some(message));
        let _ = body.append_child(&element);

        gloo_timers::callback::Timeout::new(TOAST_MS, move || {
            element.remove();
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (kind, message);
    }
}
