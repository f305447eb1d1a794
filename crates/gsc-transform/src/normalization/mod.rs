//! Cell-level normalization.

pub mod ctr;
pub mod numeric;

pub use ctr::{detect_ctr_scale, max_ctr, normalize_ctr_scale};
pub use numeric::{coerce, coerce_ctr, has_percent_sign, is_unparsable};
