pub mod common_overlap_len;
pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod find_subslice;
