// Static catalog data. Descriptive texts and images are maintained here,
// not behind the API.

use lazy_static::lazy_static;

use crate::models::Product;

lazy_static! {
    static ref PRODUCTS: Vec<Product> = vec![
        Product {
            id: 1,
            title: "Caciocavallo".to_string(),
            description: "Caciocavallo ist ein italienischer Kult-Käse mit unverwechselbarer \
                          birnenförmiger Gestalt, der traditionell paarweise an der Schnur hängt."
                .to_string(),
            category: "KAESE".to_string(),
            recipe: None,
            price: 7.99,
            image_url: "http://nucccio.github.io/casellese-images/caciocavallo.webp".to_string(),
            image_url_details: "http://nucccio.github.io/casellese-images/caciocavallo-rezepte.webp"
                .to_string(),
            ingredients: Some(
                "Kuhmilch, Lab, Salz, Konservierungsstoff: Natriumbenzoat (E211)".to_string(),
            ),
        },
        Product {
            id: 2,
            title: "Salsiccia".to_string(),
            description: "Salsiccia ist eine traditionelle italienische Wurst aus fein gewürztem \
                          Schweinefleisch, oft mit Knoblauch, Fenchel oder Chili verfeinert."
                .to_string(),
            category: "SALAMI".to_string(),
            recipe: None,
            price: 15.99,
            image_url: "http://nucccio.github.io/casellese-images/salsiccia.webp".to_string(),
            image_url_details: "http://nucccio.github.io/casellese-images/salsiccia-rezepte.webp"
                .to_string(),
            ingredients: Some("Schweinefleisch, Salz, Fenchel, Knoblauch".to_string()),
        },
        Product {
            id: 3,
            title: "Brot".to_string(),
            description: "Brot ist das zeitlose Grundnahrungsmittel, frisch gebacken mit \
                          knuspriger Kruste und weichem Inneren."
                .to_string(),
            category: "BROT".to_string(),
            recipe: None,
            price: 4.99,
            image_url: "http://nucccio.github.io/casellese-images/brot.webp".to_string(),
            image_url_details: "http://nucccio.github.io/casellese-images/brot-rezepte.webp"
                .to_string(),
            ingredients: Some("Weizenmehl, Wasser, Hefe, Salz".to_string()),
        },
    ];
}

pub fn all() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn find_resolves_known_ids() {
        assert_eq!(find(1).map(|p| p.title.as_str()), Some("Caciocavallo"));
        assert!(find(999).is_none());
    }
}
