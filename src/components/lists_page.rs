//! Lists Page
//!
//! Inventory, food and meetup items; food gets its own roll button.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::{Category, Item};
use crate::views;

#[component]
pub fn ListsPage(
    #[prop(into)] filtered: Signal<Vec<Item>>,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_pick: Callback<Option<Category>>,
) -> impl IntoView {
    let section = move |cat: Category| {
        views::by_categories(&filtered.get(), &[cat])
            .into_iter()
            .map(|item| view! { <ItemCard item=item on_edit=on_edit /> })
            .collect_view()
    };

    view! {
        <div class="page lists-page">
            <section class="category-section">
                <h3 class="section-title">{Category::Inventory.label()}</h3>
                {move || section(Category::Inventory)}
            </section>

            <section class="category-section">
                <div class="section-head">
                    <h3 class="section-title">{Category::Food.label()}</h3>
                    <button
                        type="button"
                        class="roll-btn"
                        on:click=move |_| on_pick.run(Some(Category::Food))
                    >
                        "🎲 吃什麼？"
                    </button>
                </div>
                {move || section(Category::Food)}
            </section>

            <section class="category-section">
                <h3 class="section-title">{Category::Meetup.label()}</h3>
                {move || section(Category::Meetup)}
            </section>
        </div>
    }
}
