use super::chat_panel::ChatPanel;
use super::game_preview::GamePreview;
use super::publish_bar::PublishBar;
use super::template_gallery::TemplateGallery;
use crate::model::{ChatMessage, GameDraft, GameTemplate};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CreateViewProps {
    pub draft: GameDraft,
    pub messages: Vec<ChatMessage>,
    pub templates: Vec<GameTemplate>,
    pub on_send: Callback<String>,
    pub on_select_template: Callback<GameTemplate>,
    pub on_title_change: Callback<String>,
    pub on_save_draft: Callback<()>,
    pub on_preview: Callback<()>,
    pub on_publish: Callback<()>,
    pub to_browse: Callback<()>,
}

#[function_component(CreateView)]
pub fn create_view(props: &CreateViewProps) -> Html {
    let back_cb = {
        let cb = props.to_browse.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {<div style="min-height:100vh; background:linear-gradient(#f6f2ff, #eef5ff); padding-bottom:96px;">
        <nav style="display:flex; align-items:center; justify-content:space-between; height:64px; padding:0 24px; border-bottom:1px solid rgba(124,58,237,0.2); background:rgba(255,255,255,0.6);">
            <h1 style="margin:0; font-size:24px; color:#7c3aed;">{ "DopeAlgebra" }</h1>
            <button onclick={back_cb} style="background:none; border:none; color:#7c3aed; font-size:14px;">
                { "← Back to games" }
            </button>
        </nav>
        <div style="display:grid; grid-template-columns:minmax(320px, 420px) 1fr; gap:20px; padding:20px; height:calc(100vh - 64px - 280px); min-height:360px;">
            <ChatPanel messages={props.messages.clone()} on_send={props.on_send.clone()} />
            <GamePreview draft={props.draft.clone()} on_preview={props.on_preview.clone()} />
        </div>
        <TemplateGallery templates={props.templates.clone()} on_select={props.on_select_template.clone()} />
        <PublishBar
            draft={props.draft.clone()}
            on_title_change={props.on_title_change.clone()}
            on_save_draft={props.on_save_draft.clone()}
            on_preview={props.on_preview.clone()}
            on_publish={props.on_publish.clone()}
        />
    </div>}
}
