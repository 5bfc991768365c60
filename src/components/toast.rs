use std::collections::HashMap;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first, each with an optional expiry handle
/// (a pending timer) that lives exactly as long as its toast.
#[derive(Debug)]
pub struct ToastQueue<H = ()> {
    next_id: u32,
    toasts: Vec<Toast>,
    expiries: HashMap<u32, H>,
}

impl<H> Default for ToastQueue<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            toasts: Vec::new(),
            expiries: HashMap::new(),
        }
    }
}

impl<H> ToastQueue<H> {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Ties `handle` to a visible toast. Ignored when the toast is gone.
    pub fn expire_with(&mut self, id: u32, handle: H) {
        if self.toasts.iter().any(|toast| toast.id == id) {
            self.expiries.insert(id, handle);
        }
    }

    /// Removes the toast and drops its expiry handle. Returns `false` if the
    /// toast was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        self.expiries.remove(&id);
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[cfg(test)]
    fn armed(&self) -> usize {
        self.expiries.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 70;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .toast {
                        min-width: 260px;
                        padding: 0.9rem 1.2rem;
                        border-radius: 0.75rem;
                        font-weight: 500;
                        cursor: pointer;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.success {
                        background: #ecfdf5;
                        color: #065f46;
                        border: 1px solid #a7f3d0;
                    }
                    .toast.error {
                        background: #fef2f2;
                        color: #991b1b;
                        border: 1px solid #fecaca;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| {
                let on_dismiss = props.on_dismiss.clone();
                let id = toast.id;
                let kind = match toast.kind {
                    ToastKind::Success => "success",
                    ToastKind::Error => "error",
                };
                html! {
                    <div key={id} class={classes!("toast", kind)} onclick={Callback::from(move |_| on_dismiss.emit(id))}>
                        { &toast.message }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn push_and_dismiss() {
        let mut queue = ToastQueue::<()>::default();
        let first = queue.push(ToastKind::Success, "Mensagem enviada com sucesso!");
        let second = queue.push(ToastKind::Error, "Erro ao enviar. Tente novamente.");
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn dismissing_drops_the_expiry_handle() {
        let timer = Rc::new(());
        let mut queue = ToastQueue::default();

        for _ in 0..3 {
            let id = queue.push(ToastKind::Success, "Mensagem enviada com sucesso!");
            queue.expire_with(id, Rc::clone(&timer));
            assert!(queue.dismiss(id));
        }

        assert_eq!(queue.armed(), 0);
        assert_eq!(Rc::strong_count(&timer), 1);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn handle_for_a_dismissed_toast_is_dropped_at_once() {
        let timer = Rc::new(());
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "Erro ao enviar. Tente novamente.");
        queue.dismiss(id);

        queue.expire_with(id, Rc::clone(&timer));
        assert_eq!(queue.armed(), 0);
        assert_eq!(Rc::strong_count(&timer), 1);
    }
}
