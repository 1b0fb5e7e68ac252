use dioxus::prelude::*;

/// Maximum number of toasts kept on screen; the oldest is dropped first
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays visible in the browser
pub const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// daisyUI alert class for the toast
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered queue of visible toasts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }

        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle for raising toasts from components and spawned tasks
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Store<Toasts>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(kind, message);

        #[cfg(feature = "web")]
        dismiss_after(
            toasts,
            id,
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS),
        );

        #[cfg(not(feature = "web"))]
        let _ = id;
    }
}

/// Dismiss toast `id` once `delay` completes
///
/// The timer runs in the root scope; views usually navigate away or unmount right
/// after raising a toast, which would drop a task spawned in their own scope.
fn dismiss_after(
    mut toasts: Store<Toasts>,
    id: u64,
    delay: impl std::future::Future<Output = ()> + 'static,
) {
    dioxus::dioxus_core::spawn_forever(async move {
        delay.await;
        toasts.write().dismiss(id);
    });
}

pub fn use_toasts() -> Store<Toasts> {
    use_context::<Store<Toasts>>()
}

pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toasts(),
    }
}
