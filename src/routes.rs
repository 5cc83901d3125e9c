//! Client-visible routes and the role-gated redirect policy.

use uuid::Uuid;

use crate::models::{Session, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Properties,
    PropertyDetail(Uuid),
    Auth,
    BuyerDashboard,
    SellerDashboard,
    CreateProperty,
    /// Linked from the seller dashboard; the page itself is not part of
    /// this crate yet.
    EditProperty(Uuid),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Properties => "/properties".to_string(),
            Route::PropertyDetail(id) => format!("/property/{id}"),
            Route::Auth => "/auth".to_string(),
            Route::BuyerDashboard => "/buyer-dashboard".to_string(),
            Route::SellerDashboard => "/seller-dashboard".to_string(),
            Route::CreateProperty => "/create-property".to_string(),
            Route::EditProperty(id) => format!("/edit-property/{id}"),
        }
    }

    fn requires_role(&self) -> Option<UserRole> {
        match self {
            Route::BuyerDashboard => Some(UserRole::Buyer),
            Route::SellerDashboard | Route::CreateProperty | Route::EditProperty(_) => {
                Some(UserRole::Seller)
            }
            _ => None,
        }
    }
}

/// Where a visitor on `route` must be sent instead, if anywhere.
///
/// Unauthenticated visitors on role-gated pages go to sign-in; a buyer on
/// a seller page is sent to the buyer dashboard and vice versa; an
/// already-signed-in user on the sign-in page goes home.
pub fn redirect_for(route: &Route, session: Option<&Session>) -> Option<Route> {
    if let Some(required) = route.requires_role() {
        return match session {
            None => Some(Route::Auth),
            Some(session) if session.role != required => Some(match session.role {
                UserRole::Buyer => Route::BuyerDashboard,
                UserRole::Seller => Route::SellerDashboard,
            }),
            Some(_) => None,
        };
    }
    if *route == Route::Auth && session.is_some() {
        return Some(Route::Home);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: UserRole) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: "user@example.com".into(),
            role,
        }
    }

    #[test]
    fn anonymous_visitor_is_sent_to_sign_in() {
        assert_eq!(redirect_for(&Route::BuyerDashboard, None), Some(Route::Auth));
        assert_eq!(redirect_for(&Route::SellerDashboard, None), Some(Route::Auth));
        assert_eq!(redirect_for(&Route::CreateProperty, None), Some(Route::Auth));
    }

    #[test]
    fn roles_swap_to_their_own_dashboard() {
        let buyer = session(UserRole::Buyer);
        let seller = session(UserRole::Seller);
        assert_eq!(
            redirect_for(&Route::SellerDashboard, Some(&buyer)),
            Some(Route::BuyerDashboard)
        );
        assert_eq!(
            redirect_for(&Route::BuyerDashboard, Some(&seller)),
            Some(Route::SellerDashboard)
        );
        assert_eq!(redirect_for(&Route::SellerDashboard, Some(&seller)), None);
        assert_eq!(redirect_for(&Route::BuyerDashboard, Some(&buyer)), None);
    }

    #[test]
    fn signed_in_user_skips_the_auth_page() {
        let buyer = session(UserRole::Buyer);
        assert_eq!(redirect_for(&Route::Auth, Some(&buyer)), Some(Route::Home));
        assert_eq!(redirect_for(&Route::Auth, None), None);
    }

    #[test]
    fn public_pages_never_redirect() {
        let seller = session(UserRole::Seller);
        for route in [Route::Home, Route::Properties, Route::PropertyDetail(Uuid::new_v4())] {
            assert_eq!(redirect_for(&route, None), None);
            assert_eq!(redirect_for(&route, Some(&seller)), None);
        }
    }

    #[test]
    fn paths_embed_ids() {
        let id: Uuid = "5f4e9f70-8d0e-4a43-9d26-0d4a3b1f2c11".parse().unwrap();
        assert_eq!(
            Route::PropertyDetail(id).path(),
            "/property/5f4e9f70-8d0e-4a43-9d26-0d4a3b1f2c11"
        );
        assert_eq!(Route::SellerDashboard.path(), "/seller-dashboard");
    }
}
