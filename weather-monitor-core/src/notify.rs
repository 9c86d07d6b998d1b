/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// The input was rejected before any request was made.
    Validation,
    /// The request was made and failed.
    Failure,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Validation => "Location Required",
            NoticeKind::Failure => "Error Fetching Data",
        }
    }
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Sink for messages meant for the person using the app (toast, stderr, ...).
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message)
    }
}
