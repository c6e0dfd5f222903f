/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    AdminOnly,
}

/// The route surface of the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Rezepte,
    Kontakt,
    Product { id: u32 },
    Impressum,
    Datenschutz,
    Profile,
    CreateProduct,
    EditProduct { id: u32 },
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["rezepte"] => Route::Rezepte,
            ["kontakt"] => Route::Kontakt,
            ["impressum"] => Route::Impressum,
            ["datenschutz"] => Route::Datenschutz,
            ["profile"] => Route::Profile,
            ["product", "create"] => Route::CreateProduct,
            ["product", "edit", id] => match id.parse() {
                Ok(id) => Route::EditProduct { id },
                Err(_) => Route::NotFound,
            },
            ["product", id] => match id.parse() {
                Ok(id) => Route::Product { id },
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Rezepte => "/rezepte".to_string(),
            Route::Kontakt => "/kontakt".to_string(),
            Route::Product { id } => format!("/product/{}", id),
            Route::Impressum => "/impressum".to_string(),
            Route::Datenschutz => "/datenschutz".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::CreateProduct => "/product/create".to_string(),
            Route::EditProduct { id } => format!("/product/edit/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Profile => Access::Authenticated,
            Route::CreateProduct | Route::EditProduct { .. } => Access::AdminOnly,
            _ => Access::Public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_route_surface() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/rezepte"), Route::Rezepte);
        assert_eq!(Route::from_path("/rezepte/"), Route::Rezepte);
        assert_eq!(Route::from_path("/kontakt"), Route::Kontakt);
        assert_eq!(Route::from_path("/product/7"), Route::Product { id: 7 });
        assert_eq!(Route::from_path("/product/create"), Route::CreateProduct);
        assert_eq!(Route::from_path("/product/edit/3"), Route::EditProduct { id: 3 });
        assert_eq!(Route::from_path("/profile"), Route::Profile);
        assert_eq!(Route::from_path("/impressum"), Route::Impressum);
        assert_eq!(Route::from_path("/datenschutz"), Route::Datenschutz);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::from_path("/warenkorb"), Route::NotFound);
        assert_eq!(Route::from_path("/product/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/product/edit/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/product/1/extra"), Route::NotFound);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::Rezepte,
            Route::Kontakt,
            Route::Product { id: 42 },
            Route::Impressum,
            Route::Datenschutz,
            Route::Profile,
            Route::CreateProduct,
            Route::EditProduct { id: 9 },
        ] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn access_levels_match_the_route_surface() {
        assert_eq!(Route::Home.access(), Access::Public);
        assert_eq!(Route::Rezepte.access(), Access::Public);
        assert_eq!(Route::Product { id: 1 }.access(), Access::Public);
        assert_eq!(Route::Profile.access(), Access::Authenticated);
        assert_eq!(Route::CreateProduct.access(), Access::AdminOnly);
        assert_eq!(Route::EditProduct { id: 1 }.access(), Access::AdminOnly);
    }
}
