use relief_core::{AuthService, Collection, ResourceService, TokenIssuer};
use relief_db::{Database, DocumentRepository, UserRepository};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
///
/// Built once at startup and never mutated afterwards.
pub struct AppState {
    pub auth: AuthService<UserRepository>,
    pub supplies: ResourceService<DocumentRepository>,
    pub testimonials: ResourceService<DocumentRepository>,
}

impl AppState {
    /// Wire services to the repositories vended by `db`.
    pub fn new(db: &Database, tokens: TokenIssuer) -> Self {
        Self {
            auth: AuthService::new(db.user_repo(), tokens),
            supplies: ResourceService::new(db.document_repo(), Collection::Supplies),
            testimonials: ResourceService::new(db.document_repo(), Collection::Testimonials),
        }
    }
}
