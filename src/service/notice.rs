//! Transient success/error banners shown above the request form.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// A message with a kind. A new notice replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Increases with every notice so a pending dismiss timer can tell whether it is stale.
    pub serial: u64,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Holds the visible notice, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_serial: u64,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Shows `message`, returning the serial to pass to [`NoticeBoard::dismiss`].
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_serial += 1;
        self.current = Some(Notice {
            kind,
            message: message.into(),
            serial: self.next_serial,
        });
        self.next_serial
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Success, message)
    }

    /// Shows the user-facing text of `error`.
    pub fn error(&mut self, error: &Error) -> u64 {
        self.show(NoticeKind::Error, error.user_message())
    }

    /// Clears the notice if it is still the one identified by `serial`.
    ///
    /// A timer started for an older notice must not hide a newer one.
    pub fn dismiss(&mut self, serial: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.serial == serial) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation::ValidationError;

    #[test]
    fn newer_notice_survives_stale_dismiss() {
        let mut board = NoticeBoard::default();

        let first = board.success("Tire request submitted successfully!");
        let second = board.error(&ValidationError::MissingField("costCenter").into());

        assert!(!board.dismiss(first));
        assert!(board.current().is_some_and(Notice::is_error));

        assert!(board.dismiss(second));
        assert!(board.current().is_none());
    }

    #[test]
    fn error_notice_uses_user_message() {
        let mut board = NoticeBoard::default();
        let error: Error = ValidationError::NotAuthenticated.into();
        board.error(&error);

        assert_eq!(
            board.current().map(|n| n.message.clone()),
            Some(error.user_message())
        );
    }
}
