use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{BookAdd, BookDetail, BookEdit, BooksList, CatchAll},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/books")]
    BooksList {},

    #[route("/books/:isbn")]
    BookDetail { isbn: String },

    #[route("/admin/books/add")]
    BookAdd {},

    #[route("/admin/books/:isbn/edit")]
    BookEdit { isbn: String },

    #[route("/:..segments")]
    CatchAll { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::client::routes::catch_all;

    /// Tests parsing of the public catalog routes.
    ///
    /// Expected: list and detail paths map to their screens
    #[test]
    fn parses_catalog_routes() {
        let list: Route = "/books".parse().unwrap();
        assert_eq!(list, Route::BooksList {});

        let detail: Route = "/books/0316769487".parse().unwrap();
        assert_eq!(
            detail,
            Route::BookDetail {
                isbn: "0316769487".to_string()
            }
        );
    }

    /// Tests parsing of the admin routes.
    ///
    /// Expected: add and edit paths map to the guarded form screens
    #[test]
    fn parses_admin_routes() {
        let add: Route = "/admin/books/add".parse().unwrap();
        assert_eq!(add, Route::BookAdd {});

        let edit: Route = "/admin/books/0316769487/edit".parse().unwrap();
        assert_eq!(
            edit,
            Route::BookEdit {
                isbn: "0316769487".to_string()
            }
        );
    }

    /// Tests that unmatched paths fall through to the catch-all.
    ///
    /// The admin catalog root is deliberately not in the table; the
    /// post-login redirect for admins passes through the fallback.
    ///
    /// Expected: CatchAll for "/", "/xyz", and "/admin/books/"
    #[test]
    fn routes_unmatched_paths_to_catch_all() {
        for path in ["/", "/xyz", "/admin/books/"] {
            let route: Route = path.parse().unwrap();
            assert!(
                matches!(route, Route::CatchAll { .. }),
                "{path} should fall through, got {route:?}"
            );
        }
    }

    /// Tests the fallback target of the catch-all route.
    ///
    /// Expected: "/books", making the fallback idempotent
    #[test]
    fn fallback_targets_catalog_list() {
        assert_eq!(catch_all::fallback(), Route::BooksList {});
        assert_eq!(catch_all::fallback().to_string(), "/books");
    }

    /// Tests that routes render back to the paths they parse from.
    ///
    /// Expected: stable path strings for links and redirects
    #[test]
    fn renders_stable_paths() {
        assert_eq!(Route::BooksList {}.to_string(), "/books");
        assert_eq!(
            Route::BookEdit {
                isbn: "0316769487".to_string()
            }
            .to_string(),
            "/admin/books/0316769487/edit"
        );
    }
}
