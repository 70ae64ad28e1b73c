use regex::Regex;

use crate::constants::readme::{DELETE_END, DELETE_START};
use crate::error::Result;

/// Removes every `<!--delete-->...<!--/delete-->` block, markers included.
///
/// Each start marker pairs with the nearest following end marker. Content
/// outside the blocks, and any unpaired marker, is left as-is.
pub fn remove_delete_blocks(content: &str) -> Result<String> {
    let pattern = format!("(?s){}.*?{}", regex::escape(DELETE_START), regex::escape(DELETE_END));
    let re = Regex::new(&pattern)?;
    Ok(re.replace_all(content, "").into_owned())
}
