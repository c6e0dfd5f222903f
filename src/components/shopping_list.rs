use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_shopping_list_store;

const CATEGORIES: [&str; 5] = ["KAESE", "SALAMI", "BROT", "GEWUERZ", "SONSTIGES"];

/// Die Einkaufsliste, eingebettet in die Profilseite.
#[function_component(ShoppingList)]
pub fn shopping_list() -> Html {
    let store = use_shopping_list_store();
    let ingredient_ref = use_node_ref();
    let category_ref = use_node_ref();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                store.fetch_items().await;
            });
            || ()
        });
    }

    let on_add = {
        let store = store.clone();
        let ingredient_ref = ingredient_ref.clone();
        let category_ref = category_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = ingredient_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let ingredient = input.value();
            if ingredient.trim().is_empty() {
                return;
            }
            let category = category_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| "SONSTIGES".to_string());

            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if store.add_item(ingredient.trim(), &category).await {
                    input.set_value("");
                }
            });
        })
    };

    let on_toggle = |id: u64| {
        let store = store.clone();
        Callback::from(move |_: Event| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.toggle_item(id).await;
            });
        })
    };

    let on_delete = |id: u64| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.delete_item(id).await;
            });
        })
    };

    let on_delete_checked = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.delete_checked().await;
            });
        })
    };

    let on_clear_all = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.clear_all().await;
            });
        })
    };

    let items = store.items();

    html! {
        <section class="shopping-list">
            <h2>
                { "Einkaufsliste" }
                <span class="count">
                    { format!("{} von {} offen", store.unchecked_count(), store.total_count()) }
                </span>
            </h2>

            if let Some(error) = store.error() {
                <p class="error">{ error }</p>
            }

            <form class="add-form" onsubmit={on_add}>
                <input
                    ref={ingredient_ref}
                    type="text"
                    placeholder="Zutat hinzufügen..."
                />
                <select ref={category_ref}>
                    { for CATEGORIES.iter().map(|c| html! { <option value={*c}>{ *c }</option> }) }
                </select>
                <button type="submit" class="btn-primary">{ "Hinzufügen" }</button>
            </form>

            if store.is_loading() {
                <p class="loading">{ "Lade Einkaufsliste..." }</p>
            } else if items.is_empty() {
                <p class="empty">{ "Die Einkaufsliste ist leer." }</p>
            } else {
                <ul class="items">
                    { for items.iter().map(|item| html! {
                        <li class={if item.checked { "item checked" } else { "item" }}>
                            <label>
                                <input
                                    type="checkbox"
                                    checked={item.checked}
                                    onchange={on_toggle(item.id)}
                                />
                                <span class="ingredient">{ &item.ingredient }</span>
                                <span class="category">{ &item.category }</span>
                            </label>
                            <button class="btn-delete" onclick={on_delete(item.id)}>{ "✕" }</button>
                        </li>
                    }) }
                </ul>
                <div class="list-actions">
                    <button class="btn-secondary" onclick={on_delete_checked}>
                        { "Erledigte entfernen" }
                    </button>
                    <button class="btn-secondary" onclick={on_clear_all}>
                        { "Liste leeren" }
                    </button>
                </div>
            }
        </section>
    }
}
