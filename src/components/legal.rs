use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LegalViewProps {
    pub title: AttrValue,
}

#[function_component(LegalView)]
pub fn legal_view(props: &LegalViewProps) -> Html {
    let body = match &*props.title {
        "Impressum" => html! {
            <>
                <p>{ "Casellese Feinkost GmbH" }</p>
                <p>{ "Marktgasse 12, 79098 Freiburg im Breisgau" }</p>
                <p>{ "Vertreten durch: Nuccio Casellese" }</p>
                <p>{ "Handelsregister: HRB 12345, Amtsgericht Freiburg" }</p>
            </>
        },
        _ => html! {
            <p>
                { "Personenbezogene Daten werden ausschließlich zur Abwicklung des \
                   Einkaufs verarbeitet und nicht an Dritte weitergegeben." }
            </p>
        },
    };

    html! {
        <div class="legal">
            <h1>{ props.title.clone() }</h1>
            { body }
        </div>
    }
}
