/// Times a block through the global logger's timer API.
///
/// The elapsed duration is logged at info level when the block finishes,
/// whatever the block's result.
#[macro_export]
macro_rules! time_it {
    ($label:expr, $block:expr) => {{
        let logger = $crate::global::logger();
        logger.time($label);
        let result = $block;
        logger.time_end($label);
        result
    }};
}

pub use crate::time_it;
