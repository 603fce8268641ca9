//! Read-only board preview driven by demo session snapshots.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Card, Column};

stylance::import_crate_style!(css, "src/components/board/board.module.css");

#[component]
pub fn BoardPreview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let board = ctx.board;

    let name = move || board.with(|state| state.board.name.clone());
    let columns = move || board.with(|state| state.board.columns.clone());

    view! {
        <div class=css::board>
            <h2 class=css::name>{name}</h2>
            <div class=css::columns>
                {move || {
                    columns()
                        .into_iter()
                        .map(|column| view! { <ColumnView column=column /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ColumnView(column: Column) -> impl IntoView {
    let count = column.cards.len();
    view! {
        <div class=css::column>
            <div class=css::columnHeader>
                <span>{column.name}</span>
                <span class=css::count>{count}</span>
            </div>
            <ul class=css::cards>
                {column
                    .cards
                    .into_iter()
                    .map(|card| view! { <CardView card=card /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CardView(card: Card) -> impl IntoView {
    let description = card
        .description
        .filter(|d| !d.is_empty())
        .map(|d| view! { <p class=css::description>{d}</p> });

    view! {
        <li class=css::card>
            <span class=css::cardId>{format!("#{}", card.id)}</span>
            <span class=css::cardTitle>{card.title}</span>
            {description}
        </li>
    }
}
