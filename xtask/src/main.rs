//! Workspace task runner for the multi-target build workflows.
//!
//! `build-web` produces the stand-alone browser bundle; `build-webview`
//! produces the static-shell bundle the desktop host embeds. Both compile
//! `host_browser` for wasm32 and stage the artifacts with `wasm-bindgen`.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("build-web") => build_bundle(false),
        Some("build-webview") => build_bundle(true),
        None | Some("help") => {
            usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("unknown task: {other}");
            usage();
            ExitCode::FAILURE
        }
    }
}

fn usage() {
    eprintln!("tasks:");
    eprintln!("  build-web      build and stage the browser bundle (crates/host_browser/dist)");
    eprintln!("  build-webview  build and stage the desktop webview bundle (crates/host_browser/dist-webview)");
}

fn workspace_root() -> PathBuf {
    // xtask lives directly under the workspace root.
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask has a parent directory")
        .to_path_buf()
}

fn run(root: &Path, program: &str, args: &[&str]) -> Result<(), String> {
    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|err| format!("failed to spawn {program}: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} {} failed: {status}", args.join(" ")))
    }
}

fn build_bundle(webview: bool) -> ExitCode {
    let root = workspace_root();
    let dist = if webview { "dist-webview" } else { "dist" };

    let mut cargo_args = vec![
        "build",
        "--release",
        "-p",
        "host_browser",
        "--target",
        WASM_TARGET,
    ];
    if webview {
        cargo_args.extend(["--features", "desktop-webview"]);
    }

    let wasm_artifact = format!("target/{WASM_TARGET}/release/browser_app.wasm");
    let out_dir = format!("crates/host_browser/{dist}/pkg");
    let bindgen_args = [
        wasm_artifact.as_str(),
        "--target",
        "web",
        "--no-typescript",
        "--out-dir",
        out_dir.as_str(),
        "--out-name",
        "browser_app",
    ];

    let result = run(&root, "cargo", &cargo_args)
        .and_then(|()| run(&root, "wasm-bindgen", &bindgen_args))
        .and_then(|()| stage_static_files(&root, dist));

    match result {
        Ok(()) => {
            println!("staged bundle under crates/host_browser/{dist}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn stage_static_files(root: &Path, dist: &str) -> Result<(), String> {
    let dist_dir = root.join("crates/host_browser").join(dist);
    let assets_dir = dist_dir.join("assets");
    std::fs::create_dir_all(&assets_dir).map_err(|err| format!("create {dist}/assets: {err}"))?;

    std::fs::copy(
        root.join("crates/host_browser/index.html"),
        dist_dir.join("index.html"),
    )
    .map_err(|err| format!("stage index.html: {err}"))?;
    std::fs::copy(
        root.join("crates/host_server/assets/app.css"),
        assets_dir.join("app.css"),
    )
    .map_err(|err| format!("stage app.css: {err}"))?;
    Ok(())
}
