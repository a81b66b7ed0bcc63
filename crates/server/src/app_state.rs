use shared::protocol::PlaceholderPayload;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) greeting: PlaceholderPayload,
    pub(crate) data: PlaceholderPayload,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            greeting: PlaceholderPayload::greeting(),
            data: PlaceholderPayload::data(),
        }
    }
}
