/// Handler state. Every request clones it, and cloning only bumps the
/// pool's internal reference count.
#[derive(Clone)]
pub struct AppState {
    pub pool: films_db::DbPool,
}
