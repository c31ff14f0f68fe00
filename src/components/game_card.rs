use crate::model::GameRecord;
use crate::util::difficulty_color;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: GameRecord,
    pub on_play: Callback<GameRecord>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let play_cb = {
        let cb = props.on_play.clone();
        let game = props.game.clone();
        Callback::from(move |_: MouseEvent| cb.emit(game.clone()))
    };
    let game = &props.game;
    html! {<div onclick={play_cb}
        style="border:2px solid rgba(56,139,253,0.3); border-radius:10px; overflow:hidden; cursor:pointer; background:#fff;">
        <div style="position:relative; aspect-ratio:16/9;">
            <img src={game.thumbnail.clone()} alt={game.title.clone()}
                style="width:100%; height:100%; object-fit:cover; display:block;" />
            <span style={format!("position:absolute; top:8px; right:8px; background:{}; color:#fff; border-radius:10px; padding:2px 10px; font-size:12px;", difficulty_color(game.difficulty))}>
                { game.difficulty.label() }
            </span>
        </div>
        <div style="padding:14px;">
            <h3 style="margin:0 0 8px 0; font-size:17px;">{ game.title.clone() }</h3>
            <div style="display:flex; justify-content:space-between; align-items:center; font-size:13px;">
                <span style="color:#7c3aed;">{ format!("★ {}", game.rating) }</span>
                <span style="color:#6e7681;">{ format!("by {}", game.author) }</span>
            </div>
        </div>
    </div>}
}
