//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use chichi_domain::Task;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, invoke_error};

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_task(id: &str) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_task", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
