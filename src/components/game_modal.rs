//! Modal host for playing a game: loads a fresh script runtime per open,
//! runs the game's code on demand, and layers fullscreen/mute chrome on top.

use crate::model::GameRecord;
use crate::runtime::ScriptRuntime;
use crate::session::{
    ExecutionOutcome, LOAD_FAILED_MESSAGE, RuntimePhase, SessionAction, SessionState,
};
use crate::util::{cerror, difficulty_color};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameModalProps {
    pub game: Option<GameRecord>,
    pub on_close: Callback<()>,
}

#[function_component(GameModal)]
pub fn game_modal(props: &GameModalProps) -> Html {
    let session = use_reducer(SessionState::default);
    // The runtime handle lives outside the reducer so session state stays
    // plain data. The slot is cleared on every open/close transition.
    let runtime_slot = use_mut_ref(|| None::<Rc<ScriptRuntime>>);
    // Liveness token mirror: advanced whenever the session changes, compared
    // by in-flight futures before they store a handle or dispatch.
    let live_epoch = use_mut_ref(|| 0u64);
    // Synchronous single-flight guard for the run trigger. The reducer also
    // enforces this, but dispatches only land on the next render.
    let run_guard = use_mut_ref(|| false);

    // Runtime Loader: one acquisition per open, superseded on any change of
    // the active game. A completion that arrives after the session moved on
    // is discarded here (epoch mirror) and again in the reducer (action epoch).
    {
        let session = session.clone();
        let runtime_slot = runtime_slot.clone();
        let live_epoch = live_epoch.clone();
        let run_guard = run_guard.clone();
        use_effect_with(props.game.clone(), move |game| {
            runtime_slot.replace(None);
            run_guard.replace(false);
            match game {
                Some(game) => {
                    let epoch = session.epoch + 1;
                    live_epoch.replace(epoch);
                    session.dispatch(SessionAction::Open(game.clone()));
                    let session = session.clone();
                    let runtime_slot = runtime_slot.clone();
                    let live_epoch = live_epoch.clone();
                    spawn_local(async move {
                        match ScriptRuntime::acquire().await {
                            Ok(runtime) => {
                                if *live_epoch.borrow() != epoch {
                                    return;
                                }
                                runtime_slot.replace(Some(Rc::new(runtime)));
                                session.dispatch(SessionAction::RuntimeReady { epoch });
                            }
                            Err(err) => {
                                cerror(&format!("failed to load Pyodide: {err}"));
                                if *live_epoch.borrow() != epoch {
                                    return;
                                }
                                session.dispatch(SessionAction::RuntimeFailed { epoch });
                            }
                        }
                    });
                }
                None => {
                    live_epoch.replace(session.epoch + 1);
                    session.dispatch(SessionAction::Close);
                }
            }
            || ()
        });
    }

    // Keep the logical fullscreen flag in sync when the browser leaves
    // fullscreen on its own (Esc, tab switch, etc.).
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window()
                .expect("no global `window` exists")
                .document()
                .expect("should have a document on window");
            let change_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let active = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|d| d.fullscreen_element().is_some())
                    .unwrap_or(false);
                session.dispatch(SessionAction::SetFullscreen(active));
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback(
                    "fullscreenchange",
                    change_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            move || {
                let _ = document.remove_event_listener_with_callback(
                    "fullscreenchange",
                    change_cb.as_ref().unchecked_ref(),
                );
                drop(change_cb);
            }
        });
    }

    let run_game = {
        let session = session.clone();
        let runtime_slot = runtime_slot.clone();
        let run_guard = run_guard.clone();
        Callback::from(move |_: MouseEvent| {
            if *run_guard.borrow() || !session.can_run() {
                return;
            }
            let Some(runtime) = runtime_slot.borrow().clone() else {
                return;
            };
            let Some(game) = session.game.clone() else {
                return;
            };
            let code = game.code_or_default().to_string();
            let epoch = session.epoch;
            run_guard.replace(true);
            session.dispatch(SessionAction::RunStarted);
            let session = session.clone();
            let run_guard = run_guard.clone();
            spawn_local(async move {
                let result = runtime.execute(&code).await;
                run_guard.replace(false);
                session.dispatch(SessionAction::RunFinished { epoch, result });
            });
        })
    };

    let toggle_fullscreen = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            // Best effort: reflect the requested state even if the browser
            // rejects the request; the fullscreenchange listener corrects it.
            if document.fullscreen_element().is_none() {
                if let Some(root) = document.document_element() {
                    let _ = root.request_fullscreen();
                }
                session.dispatch(SessionAction::SetFullscreen(true));
            } else {
                document.exit_fullscreen();
                session.dispatch(SessionAction::SetFullscreen(false));
            }
        })
    };

    let toggle_mute = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::ToggleMute))
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let Some(game) = props.game.clone() else {
        return html! {};
    };

    let output_view = match (&session.phase, &session.output) {
        (RuntimePhase::Failed, _) => html! {
            <pre style="margin:0; color:#f85149; white-space:pre-wrap;">{ LOAD_FAILED_MESSAGE }</pre>
        },
        (_, Some(ExecutionOutcome::Success(text))) => html! {
            <pre style="margin:0; color:#3fb950; white-space:pre-wrap;">{ text.clone() }</pre>
        },
        (_, Some(ExecutionOutcome::Failure(msg))) => html! {
            <pre style="margin:0; color:#f85149; white-space:pre-wrap;">{ format!("Error: {msg}") }</pre>
        },
        _ if session.run_in_flight => html! {
            <pre style="margin:0; color:#8b949e;">{ "Running..." }</pre>
        },
        _ => html! {
            <pre style="margin:0; color:#8b949e;">{ "Game output will appear here..." }</pre>
        },
    };

    let icon_btn = "background:none; border:none; font-size:18px; padding:4px 8px;";
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#faf7ff; border:2px solid #7c3aed; border-radius:12px; width:min(900px, 92vw); overflow:hidden;">
            <div style="display:flex; align-items:center; justify-content:space-between; padding:14px 18px; border-bottom:1px solid rgba(124,58,237,0.25);">
                <div style="display:flex; align-items:center; gap:10px;">
                    <h2 style="margin:0; font-size:20px; color:#7c3aed;">{ game.title.clone() }</h2>
                    <span style={format!("background:{}; color:#fff; border-radius:10px; padding:2px 10px; font-size:12px;", difficulty_color(game.difficulty))}>
                        { game.difficulty.label() }
                    </span>
                </div>
                <div style="display:flex; align-items:center; gap:4px;">
                    <button onclick={toggle_mute} title="Toggle sound" style={icon_btn}>
                        { if session.muted { "🔇" } else { "🔊" } }
                    </button>
                    <button onclick={toggle_fullscreen} title="Toggle fullscreen" style={icon_btn}>
                        { if session.fullscreen { "🗗" } else { "⛶" } }
                    </button>
                    <button onclick={close_cb} title="Close" style={format!("{} color:#f85149;", icon_btn)}>{ "✕" }</button>
                </div>
            </div>
            <div style="padding:20px;">
                {
                    if matches!(session.phase, RuntimePhase::Idle | RuntimePhase::Loading) {
                        html! {<div style="height:400px; display:flex; align-items:center; justify-content:center; background:rgba(124,58,237,0.08); border-radius:8px;">
                            <div style="text-align:center; color:#7c3aed;">
                                <div style="font-size:32px; margin-bottom:10px;">{ "⟳" }</div>
                                <p style="margin:0;">{ "Loading Python Environment..." }</p>
                            </div>
                        </div>}
                    } else {
                        html! {<div style="position:relative; height:400px; background:#0d1117; border-radius:8px; padding:16px; font-family:monospace; overflow:auto;">
                            { output_view }
                            <div style="position:absolute; bottom:16px; right:16px;">
                                <button onclick={run_game} disabled={!session.can_run()}
                                    style="background:#2ea043; color:#fff; border:none; border-radius:6px; padding:8px 16px; font-size:14px;">
                                    { if session.run_in_flight { "Running..." } else { "Run Game" } }
                                </button>
                            </div>
                        </div>}
                    }
                }
            </div>
        </div>
    </div>}
}
