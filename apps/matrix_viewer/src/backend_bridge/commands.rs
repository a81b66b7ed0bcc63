//! Backend commands queued from UI to backend worker.

use url::Url;

#[derive(Debug)]
pub enum BackendCommand {
    /// `GET url` and log the JSON body; the result never reaches matrix state.
    FetchGreeting { url: Url },
}
