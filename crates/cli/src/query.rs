use heroscope_api::Style;
use heroscope_core::IconEngine;
use heroscope_core::features::{format_list_text, format_search_text};
use serde::Serialize;
use std::path::PathBuf;

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn list(root: PathBuf, style: Option<Style>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = IconEngine::new(root).list_all(style)?;
    if json {
        return print_json(&result);
    }
    println!("{}", format_list_text(&result));
    Ok(())
}

pub fn search(
    root: PathBuf,
    query: &str,
    style: Option<Style>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = IconEngine::new(root).search(query, style)?;
    if json {
        return print_json(&result);
    }
    println!("{}", format_search_text(&result));
    Ok(())
}

pub fn get(root: PathBuf, name: &str, style: Style, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let icon = IconEngine::new(root).retrieve(name, Some(style))?;
    if json {
        return print_json(&icon);
    }
    println!("{}", icon.svg);
    Ok(())
}
