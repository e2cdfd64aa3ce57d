//! `ingredients` リクエストパラメータの解析
//!
//! カンマ区切りの食材リスト。カンマ直後に空白がある場合は食材名の一部とみなす
//! （"salt, pepper" は1件、"salt,pepper" は2件）。

use crate::error::{Error, Result};
use crate::scorer::Pantry;
use regex::Regex;

/// パラメータ文字列を食材名に分割する（正規化前）
pub fn split_ingredients_param(param: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref INNER_COMMA_RE: Regex = Regex::new(r",\s+").unwrap();
    }

    INNER_COMMA_RE
        .replace_all(param, " ")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// パラメータからパントリーを構築する
///
/// パラメータがない、または正規化後に空の場合は `Error::EmptyPantry`。
pub fn parse_ingredients_param(param: Option<&str>) -> Result<Pantry> {
    let param = param.map(str::trim).unwrap_or_default();
    if param.is_empty() {
        return Err(Error::EmptyPantry);
    }

    let pantry = Pantry::from_items(split_ingredients_param(param));
    if pantry.is_empty() {
        return Err(Error::EmptyPantry);
    }

    Ok(pantry)
}
