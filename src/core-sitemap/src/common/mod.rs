mod hostname;
mod logging;

pub use hostname::{HostPortError, get_api_base_url};
pub use logging::setup_logging;
