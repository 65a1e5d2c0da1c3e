use yew::prelude::*;

use super::{
    celebration_view::CelebrationView,
    dialog_modal::{DialogHost, DialogModal, DialogQueue, DialogQueueAction},
    footer::Footer,
    mini_game::MiniGame,
    prompt_view::PromptView,
};
use crate::config::Config;
use crate::model::{DialogPresenter, GreetingAction, GreetingPhase, GreetingState};
use crate::state::Interval;
use crate::util::random_seed;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::load());
    let greeting = {
        let config = config.clone();
        use_reducer(move || {
            GreetingState::new(
                config.greeting.clone(),
                config.decorations.clone(),
                random_seed(),
            )
        })
    };
    let dialog_queue = use_reducer(DialogQueue::default);
    let dialog_host = DialogHost {
        queue: dialog_queue.clone(),
    };

    // Forward dialogs raised by the greeting flow.
    {
        let host = dialog_host.clone();
        let notice = greeting.notice;
        use_effect_with(notice.map(|n| n.seq), move |_| {
            if let Some(n) = notice {
                host.present(n.dialog, None);
            }
            || ()
        });
    }

    // Celebration imagery cycles only while accepted; the guard is dropped on exit.
    {
        let greeting_tick = greeting.clone();
        let period = config.greeting.celebration_interval_ms;
        let celebrating = greeting.phase() == GreetingPhase::Accepted;
        use_effect_with(celebrating, move |celebrating| {
            let timer = if *celebrating {
                Interval::start(period, move || {
                    greeting_tick.dispatch(GreetingAction::AdvanceCelebration)
                })
            } else {
                None
            };
            move || drop(timer)
        });
    }

    let open_game = {
        let greeting = greeting.clone();
        Callback::from(move |_| greeting.dispatch(GreetingAction::OpenGame))
    };
    let close_game = {
        let greeting = greeting.clone();
        Callback::from(move |_| greeting.dispatch(GreetingAction::CloseGame))
    };
    let dismiss_dialog = {
        let queue = dialog_queue.clone();
        Callback::from(move |id: u32| queue.dispatch(DialogQueueAction::Dismiss(id)))
    };

    // A dismissed dialog's callback runs once, after it has left the screen.
    {
        let dismissed = dialog_queue.dismissed.clone();
        use_effect_with(dismissed.as_ref().map(|r| r.id), move |_| {
            if let Some(cb) = dismissed.and_then(|r| r.on_dismiss) {
                cb.emit(());
            }
            || ()
        });
    }

    let content = match greeting.phase() {
        GreetingPhase::Asking => html! { <PromptView greeting={greeting.clone()} /> },
        GreetingPhase::Accepted => html! {
            <CelebrationView gif={greeting.celebration_gif()} open_game={open_game} />
        },
    };

    html! {
        <ContextProvider<Config> context={(*config).clone()}>
            <ContextProvider<DialogHost> context={dialog_host}>
                <div style="overflow:hidden; display:flex; flex-direction:column; align-items:center; justify-content:center; padding-top:16px; height:100vh; margin-top:-64px; color:#18181b;">
                    { content }
                    <Footer />
                </div>
                if greeting.game_open {
                    <MiniGame on_close={close_game} />
                }
                <DialogModal request={dialog_queue.head().cloned()} on_dismiss={dismiss_dialog} />
            </ContextProvider<DialogHost>>
        </ContextProvider<Config>>
    }
}
