mod fmt_utils;
mod maths_utils;

pub(crate) use {
    fmt_utils::format_price,
    maths_utils::{get_max, get_min},
};
