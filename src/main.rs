// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::ffi::{CStr, CString};
use std::fs;
use std::io::{self, BufRead, Write};
use std::os::raw::c_char;

use anyhow::{bail, Context};
use engine_bridge::exports::{
    delete_engine, execute, handle_event, initial_html, is_shutdown_required, last_response_json,
    new_engine, ExportedEngineHandle,
};

/// Copy a string returned by the library. Null means the call was rejected.
fn read_c(p: *const c_char) -> Option<String> {
    if p.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned())
}

/// Minimal host: plays the role of the foreign application. Each stdin line
/// is an action body, or an event body when prefixed with `event `.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!("Example: echo '{{\"Say\": \"hi\"}}' | {} config.json", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => "{}".to_string(),
    };
    let config = CString::new(config).context("config contains a NUL byte")?;

    let handle = unsafe { new_engine(config.as_ptr()) };
    if handle.is_null() {
        bail!("engine creation failed, see log output");
    }

    let result = drive(handle);
    unsafe { delete_engine(handle) };
    result
}

fn drive(handle: *mut ExportedEngineHandle) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    if let Some(html) = read_c(unsafe { initial_html(handle) }) {
        writeln!(stdout, "{}", html)?;
    }

    let create = CString::new("\"Create\"")?;
    unsafe { handle_event(handle, create.as_ptr()) };

    for line in io::stdin().lock().lines() {
        if unsafe { is_shutdown_required(handle) } {
            break;
        }
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.strip_prefix("event ") {
            Some(event) => {
                let body = CString::new(event)?;
                unsafe { handle_event(handle, body.as_ptr()) };
            }
            None => {
                let body = CString::new(line)?;
                unsafe { execute(handle, body.as_ptr()) };
            }
        }

        if let Some(json) = read_c(unsafe { last_response_json(handle) }) {
            writeln!(stdout, "{}", json)?;
        }
    }

    if unsafe { is_shutdown_required(handle) } {
        writeln!(stdout, "shutdown requested")?;
    }
    Ok(())
}
