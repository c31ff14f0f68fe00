use super::game_card::GameCard;
use crate::model::GameRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BrowseViewProps {
    pub games: Vec<GameRecord>,
    pub on_play: Callback<GameRecord>,
    pub to_create: Callback<()>,
}

#[function_component(BrowseView)]
pub fn browse_view(props: &BrowseViewProps) -> Html {
    let create_cb = {
        let cb = props.to_create.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {<div style="min-height:100vh; background:linear-gradient(#f6f2ff, #eef5ff);">
        <nav style="display:flex; align-items:center; justify-content:space-between; height:64px; padding:0 24px; border-bottom:1px solid rgba(124,58,237,0.2); background:rgba(255,255,255,0.6);">
            <h1 style="margin:0; font-size:24px; color:#7c3aed;">{ "DopeAlgebra" }</h1>
            <button style="background:none; border:none; color:#7c3aed; font-size:14px;">{ "👤 Sign In" }</button>
        </nav>
        <div style="max-width:1100px; margin:0 auto; padding:48px 16px;">
            <div style="text-align:center; max-width:640px; margin:0 auto 48px auto;">
                <h2 style="font-size:34px; margin:0 0 12px 0; color:#7c3aed;">{ "Stay and play" }</h2>
                <p style="color:#57606a; margin:0 0 28px 0;">
                    { "Create and play mini games that are fun and engaging for the community" }
                </p>
                <button onclick={create_cb}
                    style="background:#7c3aed; color:#fff; border:none; border-radius:8px; padding:10px 20px; font-size:15px;">
                    { "🐱 Chat with Cat-rina" }
                </button>
            </div>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:24px;">
                { for props.games.iter().map(|game| html! {
                    <GameCard game={game.clone()} on_play={props.on_play.clone()} />
                }) }
            </div>
        </div>
    </div>}
}
