use crate::model::GameDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PublishBarProps {
    pub draft: GameDraft,
    pub on_title_change: Callback<String>,
    pub on_save_draft: Callback<()>,
    pub on_preview: Callback<()>,
    pub on_publish: Callback<()>,
}

#[function_component(PublishBar)]
pub fn publish_bar(props: &PublishBarProps) -> Html {
    let title_cb = {
        let cb = props.on_title_change.clone();
        Callback::from(move |e: InputEvent| {
            cb.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let save_cb = {
        let cb = props.on_save_draft.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let preview_cb = {
        let cb = props.on_preview.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let publish_cb = {
        let cb = props.on_publish.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let outline = "background:none; border-radius:6px; padding:6px 14px; font-size:13px;";
    html! {<div style="position:fixed; left:0; right:0; bottom:0; height:80px; display:flex; align-items:center; justify-content:space-between; padding:0 24px; background:rgba(124,58,237,0.08); border-top:2px solid #7c3aed;">
        <div style="display:flex; align-items:center; gap:14px;">
            <input type="text" placeholder="Game Title" value={props.draft.title.clone()} oninput={title_cb}
                style="width:260px; border:1px solid rgba(124,58,237,0.3); border-radius:6px; padding:8px 10px; font-size:14px;" />
            <span style="background:#fadb14; color:#000; border-radius:10px; padding:2px 10px; font-size:12px;">
                { props.draft.difficulty.draft_label() }
            </span>
            <span style="border:1px solid #db2777; color:#db2777; border-radius:10px; padding:2px 10px; font-size:12px;">
                { props.draft.category.clone() }
            </span>
        </div>
        <div style="display:flex; align-items:center; gap:10px;">
            <button onclick={save_cb} style={format!("{} border:1px solid #388bfd; color:#388bfd;", outline)}>
                { "💾 Save Draft" }
            </button>
            <button onclick={preview_cb} style={format!("{} border:1px solid #2ea043; color:#2ea043;", outline)}>
                { "▶ Preview" }
            </button>
            <button onclick={publish_cb} style="background:#f85149; color:#fff; border:none; border-radius:6px; padding:6px 14px; font-size:13px;">
                { "🚀 Publish" }
            </button>
        </div>
    </div>}
}
