use crate::model::{ChatMessage, Sender};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    pub on_send: Callback<String>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let input = use_state(String::new);

    let send = {
        let input = input.clone();
        let on_send = props.on_send.clone();
        move || {
            let text = input.trim().to_string();
            if !text.is_empty() {
                on_send.emit(text);
                input.set(String::new());
            }
        }
    };
    let send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send())
    };
    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send();
            }
        })
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(value);
        })
    };

    html! {<div style="display:flex; flex-direction:column; height:100%; background:rgba(250,219,20,0.08); border:2px solid #7c3aed; border-radius:10px; overflow:hidden;">
        <div style="padding:14px 16px; border-bottom:1px solid rgba(124,58,237,0.2);">
            <h2 style="margin:0; font-size:19px; color:#7c3aed;">{ "Purr-fessor AI" }</h2>
            <p style="margin:4px 0 0 0; font-size:13px; color:rgba(124,58,237,0.7);">
                { "Share your cat meme game idea and I'll help make it paw-some!" }
            </p>
        </div>
        <div style="flex:1; overflow-y:auto; padding:16px; display:flex; flex-direction:column; gap:12px;">
            { for props.messages.iter().map(|msg| {
                let user = msg.sender == Sender::User;
                let align = if user { "flex-end" } else { "flex-start" };
                let bubble = if user {
                    "background:#388bfd; color:#fff;"
                } else {
                    "background:rgba(219,39,119,0.12); color:#7c3aed;"
                };
                html! {<div key={msg.id} style={format!("display:flex; justify-content:{align};")}>
                    <div style={format!("max-width:80%; border-radius:10px; padding:10px 12px; font-size:14px; {bubble}")}>
                        { if !user { html!{<div style="font-size:11px; font-weight:600; margin-bottom:4px;">{ "🤖 AI Assistant" }</div>} } else { html!{} } }
                        { msg.content.clone() }
                    </div>
                </div>}
            }) }
        </div>
        <div style="display:flex; gap:8px; padding:14px; border-top:1px solid rgba(124,58,237,0.2);">
            <input type="text" placeholder="Describe your game idea..."
                value={(*input).clone()} oninput={on_input} onkeydown={on_keydown}
                style="flex:1; border:1px solid rgba(124,58,237,0.3); border-radius:6px; padding:8px 10px; font-size:14px;" />
            <button onclick={send_click} disabled={input.trim().is_empty()}
                style="background:#7c3aed; color:#fff; border:none; border-radius:6px; padding:8px 14px;">
                { "➤" }
            </button>
        </div>
    </div>}
}
