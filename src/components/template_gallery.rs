use crate::model::GameTemplate;
use crate::util::difficulty_color;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplateGalleryProps {
    pub templates: Vec<GameTemplate>,
    pub on_select: Callback<GameTemplate>,
}

#[function_component(TemplateGallery)]
pub fn template_gallery(props: &TemplateGalleryProps) -> Html {
    let open = use_state(|| true);

    let toggle_cb = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {<div style="background:rgba(46,160,67,0.08); border-top:2px solid #2ea043;">
        <button onclick={toggle_cb}
            style="display:flex; align-items:center; justify-content:space-between; width:100%; padding:14px 20px; background:none; border:none;">
            <span style="display:flex; align-items:center; gap:8px; font-size:17px; font-weight:600; color:#2ea043;">
                { "🎮 Paw-some Templates" }
            </span>
            <span style="color:#2ea043;">{ if *open { "▲" } else { "▼" } }</span>
        </button>
        {
            if *open {
                html! {<div style="padding:20px; display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:20px;">
                    { for props.templates.iter().map(|template| {
                        let select_cb = {
                            let cb = props.on_select.clone();
                            let template = template.clone();
                            Callback::from(move |_: MouseEvent| cb.emit(template.clone()))
                        };
                        html! {<div key={template.id}
                            style="border:2px solid rgba(56,139,253,0.3); border-radius:10px; overflow:hidden; background:#fff;">
                            <img src={template.thumbnail} alt={template.title}
                                style="width:100%; height:150px; object-fit:cover; display:block;" />
                            <div style="padding:14px;">
                                <h3 style="margin:0 0 8px 0; font-size:16px; color:#388bfd;">{ template.title }</h3>
                                <p style="margin:0 0 14px 0; font-size:13px; color:rgba(56,139,253,0.7);">{ template.description }</p>
                                <div style="display:flex; align-items:center; justify-content:space-between;">
                                    <span style={format!("font-size:13px; font-weight:500; color:{};", difficulty_color(template.difficulty))}>
                                        { template.difficulty.label() }
                                    </span>
                                    <button onclick={select_cb}
                                        style="background:#fadb14; color:#000; border:none; border-radius:6px; padding:6px 12px; font-size:13px;">
                                        { "Use Template" }
                                    </button>
                                </div>
                            </div>
                        </div>}
                    }) }
                </div>}
            } else {
                html! {}
            }
        }
    </div>}
}
