use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use super::dialog_modal::DialogHost;
use super::game_header::GameHeader;
use super::speech_bubble::SpeechBubble;
use crate::config::Config;
use crate::content;
use crate::model::{Dialog, DialogPresenter, GameAction, GamePhase, GameState};
use crate::state::{current_viewport, first_touch_point};
use crate::util::random_seed;

#[derive(Properties, PartialEq, Clone)]
pub struct MiniGameProps {
    pub on_close: Callback<()>,
}

#[function_component(MiniGame)]
pub fn mini_game(props: &MiniGameProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let dialogs = use_context::<DialogHost>();
    let game = {
        let game_cfg = config.game.clone();
        use_reducer(move || {
            let seed = random_seed();
            log::info!("mini-game layout seed {}", seed);
            GameState::new(game_cfg, current_viewport(), &mut Pcg32::seed_from_u64(seed))
        })
    };

    // Window listeners: keyboard movement and viewport resize.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = {
                let game = game.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let key = e.key();
                    if key.starts_with("Arrow") {
                        e.prevent_default();
                    }
                    game.dispatch(GameAction::KeyDown { key });
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let game = game.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    game.dispatch(GameAction::Resize(current_viewport()));
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not attach keydown listener");
                }
                let _ = win
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&keydown_cb, &resize_cb);
            }
        });
    }

    // Win dialog: `won` only ever flips once per mount.
    {
        let on_close = props.on_close.clone();
        use_effect_with(game.won, move |won| {
            if *won {
                match &dialogs {
                    Some(host) => host.present(Dialog::Win, Some(on_close)),
                    None => on_close.emit(()),
                }
            }
            || ()
        });
    }

    let touch_start = {
        let game = game.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(p) = first_touch_point(&e) {
                game.dispatch(GameAction::TouchStart(p));
            }
        })
    };
    let touch_move = {
        let game = game.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(p) = first_touch_point(&e) {
                game.dispatch(GameAction::TouchMove(p));
            }
        })
    };
    let touch_end = {
        let game = game.clone();
        Callback::from(move |_: TouchEvent| game.dispatch(GameAction::TouchEnd))
    };

    let cfg = &game.config;
    let character_style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; transition:left 0.05s linear, top 0.05s linear;",
        game.character.x, game.character.y, cfg.character_size, cfg.character_size
    );

    html! {
        <div
            class="game-container"
            style="position:fixed; inset:0; z-index:50; overflow:hidden; touch-action:none; background:linear-gradient(135deg, #ffe4e6 0%, #fbcfe8 100%);"
            ontouchstart={touch_start}
            ontouchmove={touch_move}
            ontouchend={touch_end.clone()}
            ontouchcancel={touch_end}
        >
            <GameHeader score={game.score} goal={game.hearts_to_win()} on_close={props.on_close.clone()} />
            <div style="position:absolute; bottom:16px; left:50%; transform:translateX(-50%); opacity:0.8; font-size:14px;">
                { content::GAME_INSTRUCTIONS }
            </div>
            <img src={content::CHARACTER_SPRITE} alt="Character" class="character" style={character_style} />
            <SpeechBubble
                show={game.phase() == GamePhase::Intro}
                anchor={game.character}
                character_size={cfg.character_size}
                goal={game.hearts_to_win()}
            />
            { for game.targets.iter().map(|t| html! {
                <div
                    key={t.id}
                    class="heart animate-pulse"
                    style={format!(
                        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; font-size:{}px; display:flex; align-items:center; justify-content:center;",
                        t.x, t.y, cfg.target_size, cfg.target_size, cfg.target_size * 0.75
                    )}
                >{"❤️"}</div>
            }) }
        </div>
    }
}
