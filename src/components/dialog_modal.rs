use std::rc::Rc;

use yew::prelude::*;

use crate::model::{Dialog, DialogIcon, DialogPresenter};

#[derive(Clone, PartialEq)]
pub struct DialogRequest {
    pub id: u32,
    pub dialog: Dialog,
    pub on_dismiss: Option<Callback<()>>,
}

/// FIFO of dialogs waiting to be shown; the head is on screen.
#[derive(Clone, Default, PartialEq)]
pub struct DialogQueue {
    pub pending: Vec<DialogRequest>,
    /// Request removed by the latest dismissal. Its `on_dismiss` runs once
    /// per distinct id.
    pub dismissed: Option<DialogRequest>,
    next_id: u32,
}

impl DialogQueue {
    pub fn head(&self) -> Option<&DialogRequest> {
        self.pending.first()
    }
}

pub enum DialogQueueAction {
    Present {
        dialog: Dialog,
        on_dismiss: Option<Callback<()>>,
    },
    /// Dismiss the head, if it is still the request with this id.
    Dismiss(u32),
}

impl Reducible for DialogQueue {
    type Action = DialogQueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            DialogQueueAction::Present { dialog, on_dismiss } => {
                log::debug!("queueing {:?} dialog", dialog);
                new.pending.push(DialogRequest {
                    id: new.next_id,
                    dialog,
                    on_dismiss,
                });
                new.next_id = new.next_id.wrapping_add(1);
            }
            DialogQueueAction::Dismiss(id) => {
                if new.head().map(|r| r.id) != Some(id) {
                    log::debug!("ignoring stale dismiss of dialog {}", id);
                    return self;
                }
                new.dismissed = Some(new.pending.remove(0));
            }
        }
        Rc::new(new)
    }
}

/// Context handle components use to raise dialogs.
#[derive(Clone, PartialEq)]
pub struct DialogHost {
    pub queue: UseReducerHandle<DialogQueue>,
}

impl DialogPresenter for DialogHost {
    fn present(&self, dialog: Dialog, on_dismiss: Option<Callback<()>>) {
        self.queue
            .dispatch(DialogQueueAction::Present { dialog, on_dismiss });
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DialogModalProps {
    pub request: Option<DialogRequest>,
    pub on_dismiss: Callback<u32>,
}

#[function_component]
pub fn DialogModal(props: &DialogModalProps) -> Html {
    let Some(request) = &props.request else {
        return html! {};
    };
    let cfg = request.dialog.config();
    let confirm_cb = {
        let cb = props.on_dismiss.clone();
        let id = request.id;
        Callback::from(move |_| cb.emit(id))
    };
    let backdrop_style = match cfg.backdrop_image {
        Some(img) => format!(
            "position:fixed; inset:0; display:flex; align-items:center; justify-content:center; z-index:100; background:{} url({}) right no-repeat;",
            cfg.backdrop, img
        ),
        None => format!(
            "position:fixed; inset:0; display:flex; align-items:center; justify-content:center; z-index:100; background:{};",
            cfg.backdrop
        ),
    };
    let card_background = match cfg.background_image {
        Some(img) => format!("#fff url({})", img),
        None => "#fff".to_string(),
    };
    html! {<div style={backdrop_style}>
        <div class="animate-fade-in-up" style={format!(
            "width:{}px; max-width:92vw; padding:{}; color:{}; background:{}; border-radius:8px; text-align:center; display:flex; flex-direction:column; align-items:center; gap:16px; box-shadow:0 6px 18px rgba(0,0,0,0.3);",
            cfg.width_px, cfg.padding, cfg.color, card_background
        )}>
            if let Some(DialogIcon::Success) = cfg.icon {
                <div style="font-size:56px; color:#a5dc86; line-height:1;">{"✔"}</div>
            }
            if let Some(image) = &cfg.image {
                <img src={image.url} alt={image.alt} width={image.width_px.to_string()} height={image.height_px.to_string()} style="max-width:100%; object-fit:cover;" />
            }
            <h2 style="margin:0; font-size:28px; font-weight:600;">{ cfg.title }</h2>
            if let Some(text) = cfg.body_text {
                <p style="margin:0; font-size:18px;">{ text }</p>
            }
            <button onclick={confirm_cb} style={format!(
                "background:{}; color:#fff; border:none; border-radius:6px; padding:10px 22px; font-size:16px; cursor:pointer;",
                cfg.confirm_button_color
            )}>{ cfg.confirm_button_text }</button>
        </div>
    </div>}
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn present(queue: Rc<DialogQueue>, dialog: Dialog) -> Rc<DialogQueue> {
        queue.reduce(DialogQueueAction::Present {
            dialog,
            on_dismiss: None,
        })
    }

    fn head_id(queue: &DialogQueue) -> u32 {
        queue.head().map(|r| r.id).unwrap()
    }

    #[test]
    fn dialogs_show_in_arrival_order() {
        let mut q = Rc::new(DialogQueue::default());
        q = present(q, Dialog::Celebration);
        q = present(q, Dialog::Milestone);
        q = present(q, Dialog::Win);

        let mut shown = Vec::new();
        while let Some(head) = q.head() {
            shown.push(head.dialog);
            let id = head.id;
            q = q.reduce(DialogQueueAction::Dismiss(id));
        }
        assert_eq!(shown, vec![Dialog::Celebration, Dialog::Milestone, Dialog::Win]);
    }

    #[test]
    fn dismiss_on_empty_queue_is_a_no_op() {
        let q = Rc::new(DialogQueue::default());
        let after = q.clone().reduce(DialogQueueAction::Dismiss(0));
        assert!(Rc::ptr_eq(&q, &after));
    }

    #[test]
    fn dismissal_hands_back_the_heads_callback() {
        let win_closed = Rc::new(Cell::new(0));
        let counter = win_closed.clone();
        let mut q = Rc::new(DialogQueue::default());
        q = q.reduce(DialogQueueAction::Present {
            dialog: Dialog::Win,
            on_dismiss: Some(Callback::from(move |_| counter.set(counter.get() + 1))),
        });
        q = present(q, Dialog::Milestone);

        // Nothing runs while the dialog is still on screen.
        assert!(q.dismissed.is_none());
        assert_eq!(win_closed.get(), 0);

        let id = head_id(&q);
        q = q.reduce(DialogQueueAction::Dismiss(id));
        let dismissed = q.dismissed.clone().unwrap();
        assert_eq!(dismissed.dialog, Dialog::Win);
        dismissed.on_dismiss.unwrap().emit(());
        assert_eq!(win_closed.get(), 1);
        assert_eq!(q.head().map(|r| r.dialog), Some(Dialog::Milestone));
    }

    #[test]
    fn repeated_dismiss_of_same_id_keeps_next_dialog() {
        let mut q = Rc::new(DialogQueue::default());
        q = present(q, Dialog::SoftConfirm);
        q = present(q, Dialog::Milestone);
        let first = head_id(&q);

        q = q.reduce(DialogQueueAction::Dismiss(first));
        let after_first = q.clone();
        q = q.reduce(DialogQueueAction::Dismiss(first));

        assert!(Rc::ptr_eq(&q, &after_first));
        assert_eq!(q.head().map(|r| r.dialog), Some(Dialog::Milestone));
        assert_eq!(q.dismissed.as_ref().map(|r| r.id), Some(first));
    }
}
