use yew::prelude::*;

#[function_component(KontaktView)]
pub fn kontakt_view() -> Html {
    html! {
        <div class="kontakt">
            <h1>{ "Kontakt" }</h1>
            <p>{ "Casellese Feinkost" }</p>
            <address>
                { "Marktgasse 12" }<br />
                { "79098 Freiburg im Breisgau" }<br />
                <a href="mailto:info@casellese.shop">{ "info@casellese.shop" }</a>
            </address>
            <p>{ "Öffnungszeiten: Di bis Sa, 9 bis 18 Uhr" }</p>
        </div>
    }
}
