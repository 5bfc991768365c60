use std::mem;
use std::rc::Rc;

use yew::prelude::*;

/// Dialog lifecycle. `Closing` keeps the item on screen while the exit
/// animation plays; [`ModalState::finish_close`] then drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState<T> {
    Closed,
    Open(T),
    Closing(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    /// Opens with `item`, replacing whatever was shown without passing through `Closed`.
    pub fn open(&mut self, item: T) {
        *self = ModalState::Open(item);
    }

    /// Returns `true` when the dialog started closing and the exit delay should be scheduled.
    pub fn close(&mut self) -> bool {
        match mem::replace(self, ModalState::Closed) {
            ModalState::Open(item) => {
                *self = ModalState::Closing(item);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Ends the exit animation. A dialog reopened in the meantime is left alone.
    pub fn finish_close(&mut self) -> bool {
        if matches!(self, ModalState::Closing(_)) {
            *self = ModalState::Closed;
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            ModalState::Open(item) | ModalState::Closing(item) => Some(item),
            ModalState::Closed => None,
        }
    }
}

pub enum ModalAction<T> {
    Open(T),
    Close,
    FinishClose,
}

impl<T: Clone + PartialEq> Reducible for ModalState<T> {
    type Action = ModalAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ModalAction::Open(item) => {
                next.open(item);
                true
            }
            ModalAction::Close => next.close(),
            ModalAction::FinishClose => next.finish_close(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_then_close_then_clear() {
        let mut modal = ModalState::default();
        modal.open("devsbook");
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some(&"devsbook"));

        assert!(modal.close());
        assert!(!modal.is_open());
        assert_eq!(modal.selected(), Some(&"devsbook"));

        assert!(modal.finish_close());
        assert_eq!(modal, ModalState::Closed);
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn reopen_replaces_item_without_closing() {
        let mut modal = ModalState::default();
        modal.open("a");
        modal.open("b");
        assert_eq!(modal, ModalState::Open("b"));
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal: ModalState<&str> = ModalState::default();
        assert!(!modal.close());
        assert_eq!(modal, ModalState::Closed);

        modal.open("a");
        assert!(modal.close());
        assert!(!modal.close());
        assert_eq!(modal, ModalState::Closing("a"));
    }

    #[test]
    fn stale_finish_does_not_close_a_reopened_dialog() {
        let mut modal = ModalState::default();
        modal.open("a");
        modal.close();
        modal.open("b");
        assert!(!modal.finish_close());
        assert_eq!(modal, ModalState::Open("b"));
    }

    #[test]
    fn open_implies_selection() {
        let mut modal = ModalState::default();
        modal.open(1);
        assert!(modal.is_open() && modal.selected().is_some());
    }

    #[test]
    fn reducer_keeps_identity_on_no_op() {
        let closed: Rc<ModalState<u32>> = Rc::new(ModalState::Closed);
        let after = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(ModalAction::Open(7));
        assert_eq!(*opened, ModalState::Open(7));
        let closing = opened.reduce(ModalAction::Close);
        assert_eq!(*closing, ModalState::Closing(7));
        let closed = closing.reduce(ModalAction::FinishClose);
        assert_eq!(*closed, ModalState::Closed);
    }
}
