use super::{browse_view::BrowseView, create_view::CreateView, game_modal::GameModal};
use crate::model::{
    ChatMessage, GameDraft, GameRecord, GameTemplate, Sender, default_games, default_messages,
    default_templates,
};
use crate::util::clog;
use yew::prelude::*;

const DRAFT_STORAGE_KEY: &str = "mc_draft";

#[derive(PartialEq, Clone)]
enum View {
    Browse,
    Create,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Browse);
    let games = use_state(default_games);
    let selected = use_state(|| None::<GameRecord>);
    let draft = use_state(GameDraft::default);
    let messages = use_state(default_messages);

    // Restore a previously saved draft.
    {
        let draft = draft.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(DRAFT_STORAGE_KEY) {
                        if let Ok(saved) = serde_json::from_str(&raw) {
                            draft.set(saved);
                        }
                    }
                }
            }
            || ()
        });
    }

    let on_play = {
        let selected = selected.clone();
        Callback::from(move |game: GameRecord| selected.set(Some(game)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let to_browse = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Browse))
    };
    let to_create = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Create))
    };

    let on_send = {
        let messages = messages.clone();
        Callback::from(move |text: String| {
            let mut list = (*messages).clone();
            let next_id = list.len() + 1;
            list.push(ChatMessage { id: next_id, sender: Sender::User, content: text });
            list.push(ChatMessage {
                id: next_id + 1,
                sender: Sender::Assistant,
                content: "Purr-fect idea! Pick a template below or tweak the code in the \
                          preview, then hit Publish when it feels paw-some."
                    .to_string(),
            });
            messages.set(list);
        })
    };

    let on_select_template = {
        let draft = draft.clone();
        Callback::from(move |template: GameTemplate| {
            let mut next = (*draft).clone();
            next.title = template.title.to_string();
            next.difficulty = template.difficulty;
            next.code = template.snippet.to_string();
            draft.set(next);
        })
    };

    let on_title_change = {
        let draft = draft.clone();
        Callback::from(move |title: String| {
            let mut next = (*draft).clone();
            next.title = title;
            draft.set(next);
        })
    };

    let on_save_draft = {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(&*draft) {
                        let _ = store.set_item(DRAFT_STORAGE_KEY, &raw);
                        clog(&format!("draft saved: {}", draft.title));
                    }
                }
            }
        })
    };

    // Open the modal on an ephemeral record built from the draft; it is not
    // part of the catalog until published.
    let on_preview = {
        let selected = selected.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            selected.set(Some(draft_record("preview", &draft)));
        })
    };

    let on_publish = {
        let games = games.clone();
        let draft = draft.clone();
        let view = view.clone();
        Callback::from(move |_| {
            let mut list = (*games).clone();
            let id = (list.len() + 1).to_string();
            list.push(draft_record(&id, &draft));
            clog(&format!("published game {id}: {}", draft.title));
            games.set(list);
            draft.set(GameDraft::default());
            view.set(View::Browse);
        })
    };

    let content = match *view {
        View::Browse => html! { <BrowseView
            games={(*games).clone()}
            on_play={on_play.clone()}
            to_create={to_create.clone()}
        /> },
        View::Create => html! { <CreateView
            draft={(*draft).clone()}
            messages={(*messages).clone()}
            templates={default_templates()}
            on_send={on_send}
            on_select_template={on_select_template}
            on_title_change={on_title_change}
            on_save_draft={on_save_draft}
            on_preview={on_preview}
            on_publish={on_publish}
            to_browse={to_browse}
        /> },
    };

    html! {<>
        { content }
        <GameModal game={(*selected).clone()} on_close={on_close} />
    </>}
}

fn draft_record(id: &str, draft: &GameDraft) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        title: draft.title.clone(),
        thumbnail: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=800&fit=crop"
            .to_string(),
        difficulty: draft.difficulty,
        rating: 0.0,
        author: "You".to_string(),
        python_code: Some(draft.code.clone()),
    }
}
