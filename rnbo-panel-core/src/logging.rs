pub use log::{debug, error, info, trace, warn};
