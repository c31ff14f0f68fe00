use crate::model::GameDraft;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum PreviewTab {
    Preview,
    Code,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GamePreviewProps {
    pub draft: GameDraft,
    /// Opens the modal on an ephemeral record built from the draft.
    pub on_preview: Callback<()>,
}

#[function_component(GamePreview)]
pub fn game_preview(props: &GamePreviewProps) -> Html {
    let tab = use_state(|| PreviewTab::Preview);

    let preview_cb = {
        let cb = props.on_preview.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let tab_button = |target: PreviewTab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        let style = if active {
            "border:none; border-bottom:2px solid #388bfd; background:none; color:#388bfd; padding:8px 14px; font-size:14px;"
        } else {
            "border:none; background:none; color:#57606a; padding:8px 14px; font-size:14px;"
        };
        html! {<button style={style} onclick={Callback::from(move |_: MouseEvent| tab.set(target))}>{ label }</button>}
    };

    html! {<div style="display:flex; flex-direction:column; height:100%; border:2px solid #388bfd; border-radius:10px; overflow:hidden; background:#fff;">
        <div style="display:flex; align-items:center; justify-content:space-between; padding:14px 16px; border-bottom:1px solid rgba(56,139,253,0.2);">
            <h2 style="margin:0; font-size:19px; color:#388bfd;">{ "Meow Preview" }</h2>
            <button onclick={preview_cb.clone()}
                style="background:#2ea043; color:#fff; border:none; border-radius:6px; padding:6px 14px; font-size:13px;">
                { "▶ Test Meow" }
            </button>
        </div>
        <div style="display:flex; border-bottom:1px solid rgba(56,139,253,0.2); padding:0 8px;">
            { tab_button(PreviewTab::Preview, "Preview") }
            { tab_button(PreviewTab::Code, "Code") }
        </div>
        <div style="flex:1; padding:16px; overflow:auto;">
            {
                match *tab {
                    PreviewTab::Preview => html! {<div style="position:relative; height:100%; min-height:260px; border:2px solid rgba(56,139,253,0.3); border-radius:8px; overflow:hidden;">
                        <img src="https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=1000"
                            alt="Cat meme preview" style="width:100%; height:100%; object-fit:cover; display:block;" />
                        <div style="position:absolute; bottom:14px; right:14px;">
                            <button onclick={preview_cb}
                                style="background:#db2777; color:#fff; border:none; border-radius:6px; padding:6px 14px; font-size:13px;">
                                { "▶ Play Meow" }
                            </button>
                        </div>
                    </div>},
                    PreviewTab::Code => html! {
                        <pre style="margin:0; height:100%; overflow:auto; background:rgba(124,58,237,0.06); border:2px solid rgba(124,58,237,0.2); border-radius:8px; padding:14px; font-size:13px; color:#7c3aed;">
                            { props.draft.code.clone() }
                        </pre>
                    },
                }
            }
        </div>
    </div>}
}
