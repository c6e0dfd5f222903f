use yew::prelude::*;

use crate::hooks::use_banner_store;

#[function_component(Banner)]
pub fn banner() -> Html {
    let banner = use_banner_store();

    if !banner.is_visible() {
        return html! {};
    }

    let on_close = {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| banner.hide_banner())
    };

    html! {
        <div class="banner">
            <span>{ "Frisch eingetroffen: Caciocavallo aus Kampanien 🧀" }</span>
            <button class="banner-close" onclick={on_close}>{ "✕" }</button>
        </div>
    }
}
