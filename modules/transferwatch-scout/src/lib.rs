pub mod extract;
pub mod fetch;
pub mod notify;
pub mod poll;
pub mod render;
pub mod routes;
pub mod scout;

pub use extract::extract_headlines;
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use poll::{PollOutcome, Poller};
pub use render::render_snapshot;
pub use routes::{build_router, handle_interaction, AppState, CMD_RUMOURS, CMD_TRANSFERS};
pub use scout::{HeadlineScout, Source};
